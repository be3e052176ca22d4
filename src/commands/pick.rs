use std::io::{self, Write};

use anyhow::Result;
use checkin_core::format::{nights_label, range_summary};
use checkin_core::{CalendarDate, DateRangePicker, Direction};
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::Settings;
use crate::render::{render_month, render_selection};

/// One line of user input while the calendar is open.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Day(u32),
    Month(Direction),
    Confirm,
    Dismiss,
}

/// Runs the interactive picker. The calendar, prompts and messages go to
/// stderr; stdout only carries the confirmed "START END" line.
pub fn run(
    start: Option<String>,
    end: Option<String>,
    today: CalendarDate,
    settings: &Settings,
) -> Result<()> {
    let locale = settings.locale;

    let mut picker = DateRangePicker::from_args(
        start.as_deref(),
        end.as_deref(),
        today,
        |start: &str, end: &str| println!("{} {}", start, end),
    )?;

    if let Some(summary) = range_summary(&picker.committed(), &today, locale) {
        eprintln!("  {}", summary.dimmed());
    }

    picker.open();
    let mut confirmed = false;

    loop {
        draw(&mut io::stderr().lock(), &picker, settings)?;

        let prompt = if picker.can_confirm() {
            "  Day, < or > for month, ok to confirm, q to cancel"
        } else {
            "  Day, < or > for month, q to cancel"
        };
        let input: String = Input::new().with_prompt(prompt).interact_text()?;

        let action = match parse_action(&input) {
            Ok(action) => action,
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                continue;
            }
        };

        match action {
            Action::Day(day) => {
                if let Err(e) = picker.select_day(day) {
                    eprintln!("  {}", e.to_string().red());
                }
            }
            Action::Month(direction) => picker.change_month(direction),
            Action::Confirm => match picker.confirm() {
                Ok(_) => {
                    confirmed = true;
                    break;
                }
                Err(e) => eprintln!("  {}", e.to_string().red()),
            },
            Action::Dismiss => {
                picker.dismiss();
                break;
            }
        }
    }

    if let Some(summary) = range_summary(&picker.committed(), &today, locale) {
        eprintln!("  {}", closing_line(confirmed, &summary));
    }

    Ok(())
}

/// One screen of the open calendar: month grid, selection and night count.
fn draw<F>(w: &mut impl Write, picker: &DateRangePicker<F>, settings: &Settings) -> Result<()>
where
    F: FnMut(&str, &str),
{
    let locale = settings.locale;
    let grid = picker.month_grid(settings.layout)?;

    writeln!(w)?;
    for line in render_month(&grid, settings.layout, locale) {
        writeln!(w, "{}", line)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", render_selection(&picker.visible_range(), locale))?;
    if let Some(nights) = picker.visible_range().nights() {
        writeln!(w, "  {}", nights_label(nights, locale).blue())?;
    }

    Ok(())
}

/// Green once a range is confirmed; a cancelled session keeps the previous
/// range, shown dimmed.
fn closing_line(confirmed: bool, summary: &str) -> String {
    if confirmed {
        summary.green().to_string()
    } else {
        format!("{} (cancelled)", summary).dimmed().to_string()
    }
}

fn parse_action(input: &str) -> Result<Action> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "<" | "p" | "prev" => Ok(Action::Month(Direction::Previous)),
        ">" | "n" | "next" => Ok(Action::Month(Direction::Next)),
        "ok" | "done" | "y" => Ok(Action::Confirm),
        "q" | "quit" | "cancel" => Ok(Action::Dismiss),
        other => other
            .parse::<u32>()
            .map(Action::Day)
            .map_err(|_| anyhow::anyhow!("Unrecognized input '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkin_core::locale::Locale;
    use checkin_core::month_grid::GridLayout;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn settings() -> Settings {
        Settings {
            locale: Locale::EnUs,
            layout: GridLayout::MonthOnly,
            hotels_file: None,
        }
    }

    fn today() -> CalendarDate {
        CalendarDate::parse("2026-03-01").unwrap()
    }

    #[test]
    fn screen_is_kept_apart_from_the_confirmed_range() {
        let stdout = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&stdout);
        let record = move |s: &str, e: &str| sink.borrow_mut().push(format!("{} {}", s, e));
        let mut picker = DateRangePicker::from_args(None, None, today(), record).unwrap();

        let mut screen = Vec::new();
        picker.open();
        picker.select_day(10).unwrap();
        picker.select_day(12).unwrap();
        draw(&mut screen, &picker, &settings()).unwrap();
        picker.confirm().unwrap();

        let screen = String::from_utf8(screen).unwrap();
        assert!(screen.contains("March"));
        assert!(screen.contains("2 nights"));
        assert_eq!(*stdout.borrow(), vec!["2026-03-10 2026-03-12".to_string()]);
    }

    #[test]
    fn cancelled_session_is_not_reported_as_confirmed() {
        let summary = "Mar 1 - Mar 2";
        let confirmed = closing_line(true, summary);
        let cancelled = closing_line(false, summary);

        assert_eq!(confirmed, summary.green().to_string());
        assert!(cancelled.contains("cancelled"));
        assert_ne!(cancelled, confirmed);
        assert!(!cancelled.contains(&summary.green().to_string()));
    }

    #[test]
    fn parses_day_numbers() {
        assert_eq!(parse_action("15").unwrap(), Action::Day(15));
        assert_eq!(parse_action(" 3 ").unwrap(), Action::Day(3));
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(
            parse_action("<").unwrap(),
            Action::Month(Direction::Previous)
        );
        assert_eq!(parse_action("Next").unwrap(), Action::Month(Direction::Next));
    }

    #[test]
    fn parses_confirm_and_cancel() {
        assert_eq!(parse_action("OK").unwrap(), Action::Confirm);
        assert_eq!(parse_action("q").unwrap(), Action::Dismiss);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_action("tomorrow").is_err());
        assert!(parse_action("-1").is_err());
        assert!(parse_action("").is_err());
    }
}
