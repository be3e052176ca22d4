use anyhow::{Context, Result};
use checkin_core::format::{nights_label, short_date};
use checkin_core::search::{HotelSource, StaticHotels, StayQuery};
use checkin_core::{CalendarDate, DateRange};
use owo_colors::OwoColorize;

use super::Settings;
use crate::render::Render;

pub fn run(
    start: Option<String>,
    end: Option<String>,
    location: Option<String>,
    file: Option<std::path::PathBuf>,
    today: CalendarDate,
    settings: &Settings,
) -> Result<()> {
    let Some(path) = file.or_else(|| settings.hotels_file.clone()) else {
        anyhow::bail!(
            "No hotel data configured.\n\n\
            Pass a JSON file with:\n  \
            checkin hotels --file hotels.json\n\n\
            or set hotels_file in the config file (see `checkin config show`)."
        );
    };

    let range = DateRange::from_args(start.as_deref(), end.as_deref(), today)?;
    let query = StayQuery::new(&range, location)?;

    let source = StaticHotels::load(&path)
        .with_context(|| format!("Could not load hotels from {}", path.display()))?;
    let hotels = source.hotels(&query)?;

    let text = settings.locale.text();
    println!(
        "{} {} {} {}  {}",
        text.check_in,
        short_date(&query.check_in),
        text.check_out,
        short_date(&query.check_out),
        nights_label(query.nights(), settings.locale).dimmed()
    );

    if hotels.is_empty() {
        println!("  {}", "No hotels found".dimmed());
        return Ok(());
    }

    let nights = query.nights().max(1);
    for hotel in &hotels {
        println!();
        println!("{}", hotel.render());
        if let Some(price) = hotel.lowest_price() {
            println!(
                "   ¥{:.0} / night, ¥{:.0} total",
                price,
                price * nights as f64
            );
        }
    }

    Ok(())
}
