//! The date-range picker: a committed stay plus the transient editing state
//! used while the calendar is open.

mod state;

pub use state::PickerState;

use crate::calendar_date::CalendarDate;
use crate::date_range::DateRange;
use crate::error::{PickerError, PickerResult};
use crate::month_grid::{GridLayout, MonthGrid};
use crate::view_cursor::{Direction, ViewCursor};

/// Picks a check-in/check-out pair and reports it through `on_range_selected`.
///
/// The callback receives ISO `YYYY-MM-DD` strings, start first, and runs
/// exactly once per successful [`confirm`](Self::confirm).
pub struct DateRangePicker<F>
where
    F: FnMut(&str, &str),
{
    committed: DateRange,
    today: CalendarDate,
    cursor: ViewCursor,
    state: PickerState,
    on_range_selected: F,
}

impl<F> DateRangePicker<F>
where
    F: FnMut(&str, &str),
{
    pub fn new(initial: DateRange, today: CalendarDate, on_range_selected: F) -> Self {
        let cursor = ViewCursor::containing(&initial.start().unwrap_or(today));

        DateRangePicker {
            committed: initial,
            today,
            cursor,
            state: PickerState::Closed,
            on_range_selected,
        }
    }

    /// Build from optional ISO strings, defaulting to today and tomorrow.
    pub fn from_args(
        start: Option<&str>,
        end: Option<&str>,
        today: CalendarDate,
        on_range_selected: F,
    ) -> PickerResult<Self> {
        let initial = DateRange::from_args(start, end, today)?;
        Ok(DateRangePicker::new(initial, today, on_range_selected))
    }

    /// Show the calendar at the month of the held check-in (or today).
    pub fn open(&mut self) {
        if self.state.is_open() {
            return;
        }

        self.cursor = ViewCursor::containing(&self.committed.start().unwrap_or(self.today));
        self.state = PickerState::opened_with(self.committed);
        log::debug!("picker opened at {} ({})", self.cursor, self.state.name());
    }

    /// Click `day` of the viewed month.
    ///
    /// Invalid days and clicks while closed leave the picker untouched.
    pub fn select_day(&mut self, day: u32) -> PickerResult<()> {
        if !self.state.is_open() {
            log::warn!("ignoring day {} while the picker is closed", day);
            return Err(PickerError::NotOpen);
        }

        let candidate = self.cursor.date(day).inspect_err(|e| {
            log::warn!("rejected day {} in {}: {}", day, self.cursor, e);
        })?;

        self.state = self.state.select(candidate)?;
        log::debug!("selected {} -> {}", candidate, self.state.name());
        Ok(())
    }

    pub fn change_month(&mut self, direction: Direction) {
        self.cursor = self.cursor.shift(direction);
        log::debug!("viewing {}", self.cursor);
    }

    /// Commit the selected range, notify the caller and close.
    ///
    /// Without a complete range nothing changes and `IncompleteRange` is
    /// returned.
    pub fn confirm(&mut self) -> PickerResult<DateRange> {
        let range = self.state.completed().inspect_err(|_| {
            log::warn!("confirm rejected while {}", self.state.name());
        })?;

        if let Some((start, end)) = range.bounds() {
            (self.on_range_selected)(&start.to_string(), &end.to_string());
            log::debug!("committed {} to {}", start, end);
        }

        self.committed = range;
        self.state = PickerState::Closed;
        Ok(range)
    }

    /// Close without committing; the draft is dropped.
    pub fn dismiss(&mut self) {
        if self.state.is_open() {
            log::debug!("picker dismissed while {}", self.state.name());
        }
        self.state = PickerState::Closed;
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self.state, PickerState::RangeComplete { .. })
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// The range last confirmed (or supplied at construction).
    pub fn committed(&self) -> DateRange {
        self.committed
    }

    /// What the calendar shows: the draft while open, the committed range otherwise.
    pub fn visible_range(&self) -> DateRange {
        self.state.draft().unwrap_or(self.committed)
    }

    /// The viewed month with every day marked against the visible range.
    pub fn month_grid(&self, layout: GridLayout) -> PickerResult<MonthGrid> {
        MonthGrid::build(self.cursor, &self.visible_range(), layout)
    }
}
