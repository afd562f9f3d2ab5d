use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position in the calendar year.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of days in the month, using a 365-day year.
    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Full English name, as used in climate dataset column names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter lowercase abbreviation, e.g. `"jan"`.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.index()]
    }
}

const SHORT_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month `{0}`")]
pub struct UnknownMonth(pub String);

/// Parses full names or three-letter abbreviations, ignoring case.
impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.name().to_ascii_lowercase() == needle || m.short_name() == needle)
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_has_365_days() {
        let days: u32 = Month::ALL.iter().map(|m| m.days()).sum();
        assert_eq!(days, 365);
    }

    #[test]
    fn indices_follow_calendar_order() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
        }
    }

    #[test]
    fn parses_full_and_short_names() {
        assert_eq!("March".parse::<Month>().unwrap(), Month::March);
        assert_eq!("sep".parse::<Month>().unwrap(), Month::September);
        assert_eq!(" DECEMBER ".parse::<Month>().unwrap(), Month::December);
        assert_eq!(
            "Smarch".parse::<Month>(),
            Err(UnknownMonth("Smarch".to_string()))
        );
    }

    #[test]
    fn short_name_is_prefix_of_name() {
        for month in Month::ALL {
            assert!(month.name().to_ascii_lowercase().starts_with(month.short_name()));
        }
    }
}
