//! Spoiler-free share text.
//!
//! ```text
//! CLASHDLE #42 — 3 tries
//! 🟥🟨🟥🔻🟥🟩🟥🔺
//! 🟩🟩🟥🟩🟨🟩🟩🟩
//! 🟩🟩🟩🟩🟩🟩🟩🟩
//! https://example.com/
//! ```

use crate::compare::Verdict;
use crate::rules::Variant;
use crate::session::GameSession;

/// Emoji for one tile; attributes without a verdict render as wrong.
pub const fn tile(verdict: Option<Verdict>) -> &'static str {
    match verdict {
        Some(Verdict::Correct) => "🟩",
        Some(Verdict::Close) => "🟨",
        Some(Verdict::Higher) => "🔺",
        Some(Verdict::Lower) => "🔻",
        Some(Verdict::Wrong) | None => "🟥",
    }
}

/// Absolute link to the variant's classic mode under `base_url`.
pub fn share_url(base_url: &str, variant: Variant) -> Option<String> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    Some(format!("{base}{}", variant.route()))
}

/// Builds the share text for `session`, rows oldest first.
pub fn share_text(session: &GameSession, base_url: Option<&str>) -> String {
    let variant = session.variant();
    let count = session.guess_count();
    let tries = if count == 1 { "try" } else { "tries" };

    let mut text = format!(
        "{} #{} — {count} {tries}",
        variant.title(),
        session.day().puzzle_number()
    );

    for record in session.guesses() {
        text.push('\n');
        for column in variant.columns() {
            text.push_str(tile(record.comparison().get(column.key)));
        }
    }

    if let Some(url) = base_url.and_then(|base| share_url(base, variant)) {
        text.push('\n');
        text.push_str(&url);
    }

    text
}
