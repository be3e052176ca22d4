//! Check-in / check-out date range.

use crate::calendar_date::CalendarDate;
use crate::error::PickerResult;

/// A possibly partial stay: check-in (`start`) and check-out (`end`).
///
/// `end` is never set without `start`, and `start <= end` whenever both are
/// set. The only ways to build one keep that true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

/// How a single day relates to a range, for highlighting in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Start,
    End,
    /// Strictly between start and end.
    InRange,
    Plain,
}

impl DateRange {
    pub fn empty() -> Self {
        DateRange::default()
    }

    /// Only a check-in selected.
    pub fn starting(start: CalendarDate) -> Self {
        DateRange {
            start: Some(start),
            end: None,
        }
    }

    /// A complete range; the two dates may be given in either order.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        DateRange {
            start: Some(start),
            end: Some(end),
        }
    }

    /// One night starting `today`.
    pub fn default_stay(today: CalendarDate) -> PickerResult<Self> {
        Ok(DateRange::new(today, today.next_day()?))
    }

    /// Build the initial range from optional ISO strings.
    /// - `start`: YYYY-MM-DD, defaults to `today`
    /// - `end`: YYYY-MM-DD, defaults to the day after the start
    pub fn from_args(
        start: Option<&str>,
        end: Option<&str>,
        today: CalendarDate,
    ) -> PickerResult<Self> {
        let start = match start {
            Some(s) => CalendarDate::parse(s)?,
            None => today,
        };

        let end = match end {
            Some(s) => CalendarDate::parse(s)?,
            None => start.next_day()?,
        };

        Ok(DateRange::new(start, end))
    }

    pub fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both dates, if the range is complete.
    pub fn bounds(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.start.zip(self.end)
    }

    /// Apply one click on `candidate`.
    ///
    /// With nothing held, or with a complete range held, the click starts a
    /// new range. With only a start held it closes the range, swapping the
    /// two dates if the click is earlier than the start.
    #[must_use]
    pub fn select(self, candidate: CalendarDate) -> Self {
        match (self.start, self.end) {
            (Some(start), None) => DateRange::new(start, candidate),
            _ => DateRange::starting(candidate),
        }
    }

    /// Nights in a complete range.
    pub fn nights(&self) -> Option<u64> {
        self.bounds().map(|(start, end)| nights_between(&start, &end))
    }

    pub fn mark(&self, date: &CalendarDate) -> DayMark {
        if self.start.as_ref() == Some(date) {
            DayMark::Start
        } else if self.end.as_ref() == Some(date) {
            DayMark::End
        } else if self
            .bounds()
            .is_some_and(|(start, end)| start < *date && *date < end)
        {
            DayMark::InRange
        } else {
            DayMark::Plain
        }
    }
}

/// Calendar nights between two dates, in either order.
///
/// Counted on whole days, so daylight-saving shifts and time zones cannot
/// change the result.
pub fn nights_between(start: &CalendarDate, end: &CalendarDate) -> u64 {
    start.days_until(end).unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn nights_for_one_night_and_same_day() {
        assert_eq!(nights_between(&date("2026-03-10"), &date("2026-03-11")), 1);
        assert_eq!(nights_between(&date("2026-03-10"), &date("2026-03-10")), 0);
    }

    #[test]
    fn nights_across_dst_and_year_boundaries() {
        // US and EU daylight-saving changes fall inside these ranges
        assert_eq!(nights_between(&date("2026-03-07"), &date("2026-03-09")), 2);
        assert_eq!(nights_between(&date("2026-10-24"), &date("2026-10-26")), 2);
        assert_eq!(nights_between(&date("2026-12-30"), &date("2027-01-02")), 3);
        assert_eq!(nights_between(&date("2027-01-02"), &date("2026-12-30")), 3);
    }

    #[test]
    fn first_click_sets_start_only() {
        let range = DateRange::empty().select(date("2026-03-15"));
        assert_eq!(range.start(), Some(date("2026-03-15")));
        assert_eq!(range.end(), None);
    }

    #[test]
    fn second_click_later_sets_end() {
        let range = DateRange::empty()
            .select(date("2026-03-10"))
            .select(date("2026-03-15"));
        assert_eq!(range.bounds(), Some((date("2026-03-10"), date("2026-03-15"))));
    }

    #[test]
    fn second_click_earlier_swaps() {
        let range = DateRange::empty()
            .select(date("2026-03-15"))
            .select(date("2026-03-10"));
        assert_eq!(range.bounds(), Some((date("2026-03-10"), date("2026-03-15"))));
    }

    #[test]
    fn second_click_same_day_is_zero_night_range() {
        let range = DateRange::empty()
            .select(date("2026-03-15"))
            .select(date("2026-03-15"));
        assert_eq!(range.nights(), Some(0));
    }

    #[test]
    fn third_click_resets() {
        let range = DateRange::empty()
            .select(date("2026-03-10"))
            .select(date("2026-03-15"))
            .select(date("2026-03-01"));
        assert_eq!(range.start(), Some(date("2026-03-01")));
        assert_eq!(range.end(), None);
    }

    #[test]
    fn start_never_after_end_for_any_pair_of_clicks() {
        let days: Vec<CalendarDate> = (1..=31)
            .map(|d| CalendarDate::from_ymd(2026, 3, d).unwrap())
            .collect();
        for a in &days {
            for b in &days {
                let (start, end) = DateRange::empty().select(*a).select(*b).bounds().unwrap();
                assert!(start <= end, "{} > {}", start, end);
            }
        }
    }

    #[test]
    fn default_stay_is_one_night() {
        let range = DateRange::default_stay(date("2026-12-31")).unwrap();
        assert!(range.is_complete());
        assert_eq!(range.bounds(), Some((date("2026-12-31"), date("2027-01-01"))));
        assert_eq!(range.nights(), Some(1));
    }

    #[test]
    fn partial_ranges_are_not_complete() {
        assert!(DateRange::empty().is_empty());
        let partial = DateRange::starting(date("2026-03-10"));
        assert!(!partial.is_empty());
        assert!(!partial.is_complete());
        assert_eq!(partial.nights(), None);
    }

    #[test]
    fn from_args_defaults_to_today_and_tomorrow() {
        let today = date("2026-10-16");
        let range = DateRange::from_args(None, None, today).unwrap();
        assert_eq!(range.bounds(), Some((today, date("2026-10-17"))));
    }

    #[test]
    fn from_args_orders_reversed_input() {
        let range =
            DateRange::from_args(Some("2026-03-15"), Some("2026-03-10"), date("2026-01-01"))
                .unwrap();
        assert_eq!(range.bounds(), Some((date("2026-03-10"), date("2026-03-15"))));
    }

    #[test]
    fn from_args_rejects_bad_strings() {
        assert!(DateRange::from_args(Some("15/03/2026"), None, date("2026-01-01")).is_err());
    }

    #[test]
    fn marks_start_end_and_interior() {
        let range = DateRange::new(date("2026-03-10"), date("2026-03-13"));
        assert_eq!(range.mark(&date("2026-03-10")), DayMark::Start);
        assert_eq!(range.mark(&date("2026-03-11")), DayMark::InRange);
        assert_eq!(range.mark(&date("2026-03-13")), DayMark::End);
        assert_eq!(range.mark(&date("2026-03-14")), DayMark::Plain);

        let partial = DateRange::starting(date("2026-03-10"));
        assert_eq!(partial.mark(&date("2026-03-11")), DayMark::Plain);
    }
}
