//! The line-based game loop.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use dle_bootstrap::DailyGame;
use dle_core::{GameError, GuessError};

use crate::input::{Command, HELP};
use crate::render;

pub struct App<R, W> {
    game: DailyGame,
    input: R,
    output: W,
}

impl App<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(game: DailyGame) -> Self {
        Self::new(game, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game: DailyGame, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn run(mut self) -> Result<()> {
        self.intro()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Command::Guess(name) => self.guess(&name)?,
                Command::Hint(index) => self.hint(index)?,
                Command::Stats => self.print(&render::stats(self.game.stats()))?,
                Command::Share => self.print(&self.game.share_text())?,
                Command::Reset => self.reset()?,
                Command::Help => self.print(HELP)?,
                Command::Quit => break,
                Command::Unknown(text) => {
                    self.print(&format!("Unknown command `{text}`. Type :help for commands."))?;
                }
                Command::None => {}
            }
        }

        tracing::info!("Client exiting");
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn intro(&mut self) -> Result<()> {
        let variant = self.game.variant();
        let day = self.game.day();

        let title = render::title(variant, day.puzzle_number());
        self.print(&format!("{title}  ({day})"))?;
        self.print(&format!("Guess today's {}.", variant.noun()))?;
        self.print(&render::legend())?;
        self.print("Type :help for commands.\n")?;

        if self.game.session().guess_count() > 0 {
            self.print("Resuming today's game.")?;
            self.board()?;
            if self.game.session().is_solved() {
                self.victory()?;
            }
        }
        Ok(())
    }

    /// Prints the header and every guess, newest first.
    fn board(&mut self) -> Result<()> {
        let columns = self.game.variant().columns();
        let mut lines = vec![render::header(columns)];
        lines.extend(
            self.game
                .session()
                .guesses_newest_first()
                .map(|record| render::row(record, columns)),
        );
        self.print(&lines.join("\n"))
    }

    fn guess(&mut self, name: &str) -> Result<()> {
        let columns = self.game.variant().columns();
        let outcome = self.game.submit(name).map(|record| {
            (
                render::header(columns),
                render::row(record, columns),
                record.is_solution(),
            )
        });

        match outcome {
            Ok((header, row, solved)) => {
                self.print(&header)?;
                self.print(&row)?;
                if solved {
                    self.victory()?;
                } else {
                    self.hints()?;
                }
            }
            Err(GuessError::UnknownEntity(input)) => {
                let suggestions: Vec<_> = self
                    .game
                    .session()
                    .suggest(&input)
                    .into_iter()
                    .map(|entity| entity.id().to_owned())
                    .collect();
                if suggestions.is_empty() {
                    self.print(&format!("No {} named `{input}`.", self.game.variant().noun()))?;
                } else {
                    self.print(&format!("Did you mean: {}?", suggestions.join(", ")))?;
                }
            }
            Err(error) => {
                tracing::debug!(code = error.error_code(), "Guess rejected");
                self.print(&error.to_string())?;
            }
        }
        Ok(())
    }

    fn hints(&mut self) -> Result<()> {
        let session = self.game.session();
        if !session.hints_visible() {
            return Ok(());
        }

        let lines: Vec<_> = session
            .hints()
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let revealed = session.revealed_hint(status.def.key);
                render::hint_line(i + 1, status, revealed.as_deref())
            })
            .collect();
        self.print(&format!("Hints:\n{}", lines.join("\n")))
    }

    fn hint(&mut self, index: usize) -> Result<()> {
        let Some(key) = self
            .game
            .variant()
            .hints()
            .get(index - 1)
            .map(|def| def.key)
        else {
            let count = self.game.variant().hints().len();
            return self.print(&format!("There are only {count} hints."));
        };

        match self.game.reveal_hint(key) {
            Ok(text) => self.print(&format!("Hint {index}: {text}")),
            Err(error) => self.print(&error.to_string()),
        }
    }

    fn reset(&mut self) -> Result<()> {
        match self.game.reset() {
            Ok(()) => self.print("Starting over. The answer is the same."),
            Err(error) => self.print(&error.to_string()),
        }
    }

    fn victory(&mut self) -> Result<()> {
        let session = self.game.session();
        let count = session.guess_count();
        let tries = if count == 1 { "try" } else { "tries" };
        let message = format!(
            "\nYou found {} in {count} {tries}!",
            session.target().id()
        );

        self.print(&message)?;
        self.print(&render::stats(self.game.stats()))?;
        self.print(&format!("\n{}\n", self.game.share_text()))?;
        self.print(&format!("Next puzzle in {}", self.game.countdown()))
    }
}
