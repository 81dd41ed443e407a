//! Calendar primitives: Monday-first weekdays and hour windows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of week, Monday-first (index 0 = Monday, 6 = Sunday).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in Monday→Sunday order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday-first index (0–6).
    pub fn index(self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Human-readable day name.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn from_index(index: u8) -> Option<Weekday> {
        Self::ALL.get(index as usize).copied()
    }

    /// Parse a day name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Weekday> {
        Self::ALL
            .iter()
            .find(|d| d.label().eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    /// True for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        self.index() >= 5
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive hour range within a day (e.g., 18–21).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    pub start: u8,
    pub end: u8,
}

impl HourWindow {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u8) -> bool {
        self.start <= hour && hour <= self.end
    }

    /// All hours in the window, ascending.
    pub fn hours(&self) -> Vec<u8> {
        (self.start..=self.end).collect()
    }
}

/// Morning prime-time window (7–10 inclusive).
pub const MORNING_PRIME: HourWindow = HourWindow::new(7, 10);
/// Evening prime-time window (18–21 inclusive).
pub const EVENING_PRIME: HourWindow = HourWindow::new(18, 21);

/// True when the hour falls in either prime-time window.
pub fn is_prime_time(hour: u8) -> bool {
    MORNING_PRIME.contains(hour) || EVENING_PRIME.contains(hour)
}
