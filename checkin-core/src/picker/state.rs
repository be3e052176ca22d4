//! Picker states and their transitions.

use crate::calendar_date::CalendarDate;
use crate::date_range::DateRange;
use crate::error::{PickerError, PickerResult};

/// Where the picker is in a selection.
///
/// The open states carry the draft range, so a state can never hold an end
/// date without a start or an end before its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    /// Collapsed: only the committed range is shown.
    #[default]
    Closed,
    SelectingStart,
    SelectingEnd {
        start: CalendarDate,
    },
    RangeComplete {
        start: CalendarDate,
        end: CalendarDate,
    },
}

impl PickerState {
    /// The open state that shows `draft`.
    pub fn opened_with(draft: DateRange) -> Self {
        match (draft.start(), draft.end()) {
            (Some(start), Some(end)) => PickerState::RangeComplete { start, end },
            (Some(start), None) => PickerState::SelectingEnd { start },
            _ => PickerState::SelectingStart,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, PickerState::Closed)
    }

    /// The in-progress range, or `None` while closed.
    pub fn draft(&self) -> Option<DateRange> {
        match *self {
            PickerState::Closed => None,
            PickerState::SelectingStart => Some(DateRange::empty()),
            PickerState::SelectingEnd { start } => Some(DateRange::starting(start)),
            PickerState::RangeComplete { start, end } => Some(DateRange::new(start, end)),
        }
    }

    /// Apply a click on `candidate`.
    pub fn select(self, candidate: CalendarDate) -> PickerResult<Self> {
        let draft = self.draft().ok_or(PickerError::NotOpen)?;
        Ok(PickerState::opened_with(draft.select(candidate)))
    }

    /// The range to commit, if one is complete.
    pub fn completed(&self) -> PickerResult<DateRange> {
        match *self {
            PickerState::RangeComplete { start, end } => Ok(DateRange::new(start, end)),
            _ => Err(PickerError::IncompleteRange),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PickerState::Closed => "closed",
            PickerState::SelectingStart => "selecting start",
            PickerState::SelectingEnd { .. } => "selecting end",
            PickerState::RangeComplete { .. } => "range complete",
        }
    }
}
