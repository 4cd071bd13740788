//! Line-to-command mapping for the terminal client.

/// What one line of player input asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// A name to submit as a guess.
    Guess(String),
    /// Reveal the n-th hint (1-based).
    Hint(usize),
    Stats,
    Share,
    Reset,
    Help,
    Quit,
    /// A `:` command that was not recognized, kept for the error message.
    Unknown(String),
    /// Blank line.
    None,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::None;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Self::Guess(line.to_owned());
        };

        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let argument = words.next();

        match (name.as_str(), argument) {
            ("hint" | "h", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Self::Hint(n),
                _ => Self::Unknown(line.to_owned()),
            },
            ("stats", None) => Self::Stats,
            ("share", None) => Self::Share,
            ("reset", None) => Self::Reset,
            ("help" | "?", None) => Self::Help,
            ("quit" | "q" | "exit", None) => Self::Quit,
            _ => Self::Unknown(line.to_owned()),
        }
    }
}

pub const HELP: &str = "\
Type a name to guess. Commands:
  :hint <n>   reveal hint n once unlocked
  :stats      show your statistics
  :share      print the share text
  :reset      start today's puzzle over
  :help       show this help
  :quit       leave the game";
