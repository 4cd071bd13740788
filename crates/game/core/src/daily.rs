//! Daily puzzle selection and calendar helpers.
//!
//! The daily target is a pure function of the calendar day and the roster:
//! the day is rendered as `"Www Mmm DD YYYY"` (e.g. `"Wed Jan 01 2025"`), the
//! character codes are summed into a seed, and the seed modulo the roster
//! length picks the entity. This is a reproducibility hash, not a source of
//! unpredictability.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::entity::{Entity, Roster};

/// First day of puzzle numbering (puzzle #0): 2025-01-01.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// A local calendar day, rendered as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before, or `None` at the calendar's lower bound.
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Locale-stable rendering hashed by [`select_daily`].
    pub fn seed_string(&self) -> String {
        self.0.format("%a %b %d %Y").to_string()
    }

    /// Days since [`epoch`]; negative before it.
    pub fn puzzle_number(&self) -> i64 {
        (self.0 - epoch()).num_days()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

/// Sums the character codes of `text`.
pub fn daily_seed(text: &str) -> u64 {
    text.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Roster index selected for `day`.
pub fn daily_index(day: DayKey, roster_len: usize) -> usize {
    assert!(roster_len > 0, "daily selection requires a non-empty roster");
    // usize -> u64 is lossless on every supported target.
    (daily_seed(&day.seed_string()) % roster_len as u64) as usize
}

/// Today's target for `roster`.
///
/// [`Roster`] is non-empty by construction, so this cannot fail.
pub fn select_daily(roster: &Roster, day: DayKey) -> &Entity {
    roster.at(daily_index(day, roster.len()))
}

/// Time left until the next local midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    /// Countdown from `now` to the following midnight.
    pub fn until_midnight(now: NaiveDateTime) -> Self {
        let next_midnight = now
            .date()
            .succ_opt()
            .and_then(|day| day.and_hms_opt(0, 0, 0));
        let remaining = next_midnight
            .map(|midnight| (midnight - now).num_seconds().max(0))
            .unwrap_or(0);
        // remaining is within one day, so it fits in u32.
        let total = remaining as u32;

        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// Countdown from the current local time.
    pub fn now() -> Self {
        Self::until_midnight(Local::now().naive_local())
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
