use anyhow::Result;
use checkin_core::format::display_label;
use checkin_core::{CalendarDate, nights_between};

use super::Settings;

pub fn nights(start: &str, end: &str) -> Result<()> {
    let start = CalendarDate::parse(start)?;
    let end = CalendarDate::parse(end)?;

    println!("{}", nights_between(&start, &end));
    Ok(())
}

pub fn label(date: &str, today: CalendarDate, settings: &Settings) -> Result<()> {
    let date = CalendarDate::parse(date)?;

    println!("{}", display_label(&date, &today, settings.locale));
    Ok(())
}
