//! Text rendering of the board, hints and stats.
//!
//! Everything returns `String`s; colors come from `crossterm` styling and
//! are plain ANSI sequences in the output.
use crossterm::style::{Color, Stylize};
use dle_core::{Column, GuessRecord, HintStatus, Stats, TileColor, Variant, Verdict};

const NAME_WIDTH: usize = 16;
const CELL_WIDTH: usize = 13;

fn color(tile: TileColor) -> Color {
    match tile {
        TileColor::Green => Color::DarkGreen,
        TileColor::Amber => Color::DarkYellow,
        TileColor::Red => Color::DarkRed,
    }
}

/// Fits `text` into `width` columns, cutting with `…` when too long.
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:<width$}");
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Cell text for one attribute: the guessed value plus a direction marker.
pub fn cell_text(value: Option<String>, verdict: Option<Verdict>) -> String {
    let value = value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "?".to_owned());
    match verdict.and_then(Verdict::marker) {
        Some(marker) => format!("{value} {marker}"),
        None => value,
    }
}

pub fn header(columns: &[Column]) -> String {
    let mut line = fit("", NAME_WIDTH);
    for column in columns {
        line.push(' ');
        line.push_str(&fit(column.label, CELL_WIDTH).bold().to_string());
    }
    line
}

/// One guess as a row of colored tiles.
pub fn row(record: &GuessRecord, columns: &[Column]) -> String {
    let entity = record.entity();
    let mut line = fit(entity.id(), NAME_WIDTH).bold().to_string();

    for column in columns {
        let verdict = record.comparison().get(column.key);
        let text = cell_text(entity.get(column.key).map(ToString::to_string), verdict);
        let tile = verdict.map_or(TileColor::Red, Verdict::color);

        line.push(' ');
        line.push_str(
            &fit(&text, CELL_WIDTH)
                .with(Color::White)
                .on(color(tile))
                .to_string(),
        );
    }
    line
}

pub fn legend() -> String {
    [
        " correct ".with(Color::White).on(color(TileColor::Green)).to_string(),
        " close ".with(Color::White).on(color(TileColor::Amber)).to_string(),
        " wrong ".with(Color::White).on(color(TileColor::Red)).to_string(),
        "▲ answer is higher  ▼ answer is lower".to_string(),
    ]
    .join(" ")
}

/// Hint panel line: label and either the unlock countdown or a reveal prompt.
pub fn hint_line(index: usize, status: &HintStatus, revealed_text: Option<&str>) -> String {
    let label = status.def.label;
    match (revealed_text, status.unlocked) {
        (Some(text), _) => format!("  {index}. {label}: {text}"),
        (None, true) => format!("  {index}. {label}: ready (:hint {index})"),
        (None, false) => {
            let plural = if status.remaining == 1 { "guess" } else { "guesses" };
            format!("  {index}. {label}: unlocks in {} {plural}", status.remaining)
        }
    }
}

/// Stats summary with a guess distribution bar chart.
pub fn stats(stats: &Stats) -> String {
    let mut lines = vec![format!(
        "Played {}  Win % {}  Streak {}  Max streak {}",
        stats.played,
        stats.win_percentage(),
        stats.current_streak,
        stats.max_streak
    )];

    let max = stats.max_bucket().max(1);
    for (guesses, count) in &stats.guess_distribution {
        let width = (count * 20).div_ceil(max) as usize;
        lines.push(format!("  {guesses:>3} | {} {count}", "█".repeat(width)));
    }
    lines.join("\n")
}

pub fn title(variant: Variant, puzzle: i64) -> String {
    format!("{} #{puzzle}", variant.title()).bold().to_string()
}
