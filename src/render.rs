//! TUI rendering for checkin-core types.
//!
//! Extension traits and helpers that add colored terminal output using
//! owo_colors.

use checkin_core::format::month_title;
use checkin_core::locale::Locale;
use checkin_core::month_grid::{GridCell, GridLayout, MonthGrid};
use checkin_core::search::Hotel;
use checkin_core::{DateRange, DayMark};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for GridCell {
    fn render(&self) -> String {
        match self {
            GridCell::Day { date, mark } => {
                let day = format!("{:>3}", date.day());
                match mark {
                    DayMark::Start | DayMark::End => day.white().on_blue().bold().to_string(),
                    DayMark::InRange => day.blue().to_string(),
                    DayMark::Plain => day,
                }
            }
            GridCell::Outside { date } => format!("{:>3}", date.day()).dimmed().to_string(),
        }
    }
}

impl Render for Hotel {
    fn render(&self) -> String {
        let stars = "★".repeat(self.star as usize);
        let name = match &self.name_en {
            Some(en) => format!("{} ({})", self.name.bold(), en),
            None => self.name.bold().to_string(),
        };
        format!("{} {}\n   {}", stars.yellow(), name, self.address.dimmed())
    }
}

/// Title, optional weekday header and one line per week.
pub fn render_month(grid: &MonthGrid, layout: GridLayout, locale: Locale) -> Vec<String> {
    let mut lines = vec![format!("  {}", month_title(&grid.cursor(), locale).bold())];

    // Column headers only line up when the grid is padded to full weeks
    if matches!(layout, GridLayout::Padded { .. }) {
        let header: String = locale
            .text()
            .headers_in_order()
            .iter()
            .map(|h| header_cell(h))
            .collect();
        lines.push(header.dimmed().to_string());
    }

    for week in grid.weeks() {
        let row: Vec<String> = week.iter().map(Render::render).collect();
        lines.push(row.join(" "));
    }

    lines
}

/// Check-in and check-out lines for the picker footer.
pub fn render_selection(range: &DateRange, locale: Locale) -> String {
    let text = locale.text();
    let show = |date: Option<checkin_core::CalendarDate>| match date {
        Some(d) => d.to_string().bold().to_string(),
        None => text.unselected.dimmed().to_string(),
    };

    format!(
        "  {}: {}\n  {}: {}",
        text.check_in,
        show(range.start()),
        text.check_out,
        show(range.end())
    )
}

/// Pad a header so it spans the same three columns as a day number.
fn header_cell(header: &str) -> String {
    if header.is_ascii() {
        format!("{:>3} ", header)
    } else {
        // CJK characters are two columns wide
        format!(" {} ", header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::{CalendarDate, ViewCursor};

    #[test]
    fn header_cells_are_four_columns() {
        assert_eq!(header_cell("Su"), " Su ");
        assert_eq!(header_cell("日"), " 日 ");
    }

    #[test]
    fn plain_day_is_right_aligned() {
        let cell = GridCell::Day {
            date: CalendarDate::parse("2026-03-05").unwrap(),
            mark: DayMark::Plain,
        };
        assert_eq!(cell.render(), "  5");
    }

    #[test]
    fn month_only_grid_has_no_header_row() {
        let cursor = ViewCursor::new(2026, 3).unwrap();
        let grid = MonthGrid::build(cursor, &DateRange::empty(), GridLayout::MonthOnly).unwrap();
        let lines = render_month(&grid, GridLayout::MonthOnly, Locale::EnUs);
        // title + five weeks
        assert_eq!(lines.len(), 6);
    }
}
