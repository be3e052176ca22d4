//! Day cells for one month of the picker.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendar_date::CalendarDate;
use crate::date_range::{DateRange, DayMark};
use crate::error::{PickerError, PickerResult};
use crate::view_cursor::ViewCursor;

/// Weeks in a padded grid.
pub const PADDED_WEEKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLayout {
    /// Only the month's own days, starting in the first column.
    #[default]
    MonthOnly,
    /// Six full weeks, filled in from the neighbouring months.
    Padded { week_start: Weekday },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// A selectable day of the viewed month.
    Day { date: CalendarDate, mark: DayMark },
    /// Padding from the previous or next month. Not selectable.
    Outside { date: CalendarDate },
}

impl GridCell {
    pub fn date(&self) -> CalendarDate {
        match self {
            GridCell::Day { date, .. } | GridCell::Outside { date } => *date,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, GridCell::Day { .. })
    }
}

/// A month laid out as cells, each day marked against a range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cursor: ViewCursor,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn build(cursor: ViewCursor, range: &DateRange, layout: GridLayout) -> PickerResult<Self> {
        let cells = match layout {
            GridLayout::MonthOnly => cursor
                .days()
                .map(|day| -> PickerResult<GridCell> {
                    let date = cursor.date(day)?;
                    Ok(GridCell::Day {
                        date,
                        mark: range.mark(&date),
                    })
                })
                .collect::<PickerResult<Vec<_>>>()?,
            GridLayout::Padded { week_start } => padded_cells(cursor, range, week_start)?,
        };

        Ok(MonthGrid { cursor, cells })
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Rows of seven cells; the last row may be short for `MonthOnly`.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }
}

fn padded_cells(
    cursor: ViewCursor,
    range: &DateRange,
    week_start: Weekday,
) -> PickerResult<Vec<GridCell>> {
    let first = cursor.first_naive()?;
    let lead = leading_days(first, week_start);

    let grid_start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| out_of_range(cursor))?;

    (0..(PADDED_WEEKS * 7) as u64)
        .map(|offset| -> PickerResult<GridCell> {
            let date: CalendarDate = grid_start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| out_of_range(cursor))?
                .into();

            Ok(if cursor.contains(&date) {
                GridCell::Day {
                    date,
                    mark: range.mark(&date),
                }
            } else {
                GridCell::Outside { date }
            })
        })
        .collect()
}

/// Blank columns before the 1st when weeks start on `week_start`.
fn leading_days(first: NaiveDate, week_start: Weekday) -> u64 {
    let first_col = first.weekday().num_days_from_monday();
    let start_col = week_start.num_days_from_monday();
    u64::from((first_col + 7 - start_col) % 7)
}

fn out_of_range(cursor: ViewCursor) -> PickerError {
    PickerError::InvalidDate(format!("{} cannot be laid out as a full grid", cursor))
}
