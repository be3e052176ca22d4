//! Core types for checkin.
//!
//! - `CalendarDate`, `DateRange` and `ViewCursor` for the dates being picked
//! - `picker` for the `DateRangePicker` state machine
//! - `format` and `locale` for labels shown to the user
//! - `search` for handing a committed stay to a hotel source

pub mod calendar_date;
pub mod config;
pub mod date_range;
pub mod error;
pub mod format;
pub mod locale;
pub mod month_grid;
pub mod picker;
pub mod search;
pub mod view_cursor;

pub use calendar_date::{CalendarDate, days_in_month, is_leap_year};
pub use date_range::{DateRange, DayMark, nights_between};
pub use error::{PickerError, PickerResult};
pub use locale::Locale;
pub use picker::{DateRangePicker, PickerState};
pub use view_cursor::{Direction, ViewCursor};
