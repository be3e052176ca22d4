//! A single calendar day, the unit every selection is made of.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// A validated (year, month, day) in the proleptic Gregorian calendar.
///
/// Ordering is date ordering. Displays and serializes as `YYYY-MM-DD`, so for
/// four-digit years the string form sorts the same way the dates do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, rejecting anything that is not a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> PickerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PickerError::InvalidDate(format!(
                "month {} is out of range (expected 1-12)",
                month
            )));
        }

        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(PickerError::InvalidDate(format!(
                "day {} is out of range for {}-{:02} (expected 1-{})",
                day, year, month, last
            )));
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| {
                PickerError::InvalidDate(format!("year {} is not representable", year))
            })
    }

    /// Parse an ISO `YYYY-MM-DD` string. Exactly four year digits and two
    /// each for month and day.
    pub fn parse(s: &str) -> PickerResult<Self> {
        let invalid = || PickerError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s));

        let trimmed = s.trim();
        if !is_iso_shape(trimmed) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
            .map(CalendarDate)
            .map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    pub fn iso_weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// The following calendar day.
    pub fn next_day(&self) -> PickerResult<Self> {
        self.0
            .succ_opt()
            .map(CalendarDate)
            .ok_or_else(|| PickerError::InvalidDate(format!("no day after {}", self)))
    }

    /// Whole calendar days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl FromStr for CalendarDate {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

/// `DDDD-DD-DD`, all ASCII digits apart from the two dashes.
fn is_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`. Months outside 1-12 have none.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
