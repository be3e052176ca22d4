//! The month currently shown by the picker.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::calendar_date::{CalendarDate, days_in_month};
use crate::error::{PickerError, PickerResult};

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// A (year, month) pair, independent of whatever range is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewCursor {
    year: i32,
    month: u32,
}

impl ViewCursor {
    /// Years are limited to what a calendar date can represent.
    pub fn new(year: i32, month: u32) -> PickerResult<Self> {
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(PickerError::InvalidDate(format!(
                "year {} is not representable",
                year
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(PickerError::InvalidDate(format!(
                "month {} is out of range (expected 1-12)",
                month
            )));
        }
        Ok(ViewCursor { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: &CalendarDate) -> Self {
        ViewCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> PickerResult<Self> {
        let invalid = || PickerError::InvalidDate(format!("'{}'. Expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        ViewCursor::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move one month, carrying into the year at January and December.
    /// At the first or last representable month the cursor stays put.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Self {
        let (year, month) = match (direction, self.month) {
            (Direction::Previous, 1) => (self.year.checked_sub(1), 12),
            (Direction::Previous, m) => (Some(self.year), m - 1),
            (Direction::Next, 12) => (self.year.checked_add(1), 1),
            (Direction::Next, m) => (Some(self.year), m + 1),
        };

        year.and_then(|y| ViewCursor::new(y, month).ok()).unwrap_or(self)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Day numbers of this month, in order.
    pub fn days(&self) -> RangeInclusive<u32> {
        1..=self.days_in_month()
    }

    /// The date of `day` in this month. Days outside the month are rejected.
    pub fn date(&self, day: u32) -> PickerResult<CalendarDate> {
        CalendarDate::from_ymd(self.year, self.month, day)
    }

    pub fn first_day(&self) -> PickerResult<CalendarDate> {
        self.date(1)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub(crate) fn first_naive(&self) -> PickerResult<NaiveDate> {
        self.first_day().map(|d| d.as_naive())
    }
}

impl fmt::Display for ViewCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(year: i32, month: u32) -> ViewCursor {
        ViewCursor::new(year, month).unwrap()
    }

    #[test]
    fn previous_from_january_wraps_to_december() {
        assert_eq!(cursor(2026, 1).shift(Direction::Previous), cursor(2025, 12));
    }

    #[test]
    fn next_from_december_wraps_to_january() {
        assert_eq!(cursor(2026, 12).shift(Direction::Next), cursor(2027, 1));
    }

    #[test]
    fn shifts_within_year() {
        assert_eq!(cursor(2026, 3).shift(Direction::Next), cursor(2026, 4));
        assert_eq!(cursor(2026, 3).shift(Direction::Previous), cursor(2026, 2));
    }

    #[test]
    fn twelve_steps_is_one_year() {
        let start = cursor(2026, 5);
        let forward = (0..12).fold(start, |c, _| c.shift(Direction::Next));
        let back = (0..12).fold(start, |c, _| c.shift(Direction::Previous));
        assert_eq!(forward, cursor(2027, 5));
        assert_eq!(back, cursor(2025, 5));
    }

    #[test]
    fn days_cover_the_whole_month() {
        let days: Vec<u32> = cursor(2024, 2).days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&29));
        assert_eq!(cursor(2026, 4).days().count(), 30);
    }

    #[test]
    fn date_rejects_days_outside_month() {
        assert!(cursor(2026, 2).date(29).is_err());
        assert!(cursor(2026, 2).date(0).is_err());
        assert_eq!(cursor(2026, 2).date(28).unwrap().to_string(), "2026-02-28");
    }

    #[test]
    fn parse_year_month() {
        assert_eq!(ViewCursor::parse("2026-03").unwrap(), cursor(2026, 3));
        assert!(ViewCursor::parse("2026-13").is_err());
        assert!(ViewCursor::parse("March").is_err());
        assert_eq!(cursor(2026, 3).to_string(), "2026-03");
    }

    #[test]
    fn year_is_bounded_by_calendar_range() {
        assert!(ViewCursor::parse("2147483647-12").is_err());
        assert!(ViewCursor::new(i32::MIN, 1).is_err());
    }

    #[test]
    fn shift_stops_at_calendar_bounds() {
        let last = cursor(NaiveDate::MAX.year(), 12);
        assert_eq!(last.shift(Direction::Next), last);

        let first = cursor(NaiveDate::MIN.year(), 1);
        assert_eq!(first.shift(Direction::Previous), first);
        assert_eq!(
            first.shift(Direction::Next),
            cursor(NaiveDate::MIN.year(), 2)
        );
    }

    #[test]
    fn rejects_month_zero() {
        assert!(ViewCursor::new(2026, 0).is_err());
    }
}
