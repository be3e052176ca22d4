use anyhow::Result;
use checkin_core::format::range_summary;
use checkin_core::month_grid::MonthGrid;
use checkin_core::{CalendarDate, DateRange, ViewCursor};

use super::Settings;
use crate::render::render_month;

/// Print one month, marking the given range if there is one.
pub fn run(
    month: Option<String>,
    start: Option<String>,
    end: Option<String>,
    today: CalendarDate,
    settings: &Settings,
) -> Result<()> {
    let range = if start.is_some() || end.is_some() {
        DateRange::from_args(start.as_deref(), end.as_deref(), today)?
    } else {
        DateRange::empty()
    };

    let cursor = match month {
        Some(m) => ViewCursor::parse(&m)?,
        None => ViewCursor::containing(&range.start().unwrap_or(today)),
    };

    let grid = MonthGrid::build(cursor, &range, settings.layout)?;
    for line in render_month(&grid, settings.layout, settings.locale) {
        println!("{}", line);
    }

    if let Some(summary) = range_summary(&range, &today, settings.locale) {
        println!();
        println!("  {}", summary);
    }

    Ok(())
}
