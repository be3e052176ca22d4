//! Human-readable labels for dates, ranges and months.
//!
//! Every function takes the reference "today" explicitly; nothing here reads
//! the clock.

use crate::calendar_date::CalendarDate;
use crate::date_range::DateRange;
use crate::locale::Locale;
use crate::view_cursor::ViewCursor;

/// Month and day only: `3月10日` / `March 10`.
pub fn date_caption(date: &CalendarDate, locale: Locale) -> String {
    match locale {
        Locale::ZhCn => format!("{}月{}日", date.month(), date.day()),
        Locale::EnUs => format!(
            "{} {}",
            locale.text().month_name(date.month()),
            date.day()
        ),
    }
}

/// "today", "tomorrow", or the month/day/weekday form.
pub fn display_label(date: &CalendarDate, reference_today: &CalendarDate, locale: Locale) -> String {
    let text = locale.text();

    match relative_day(date, reference_today) {
        Some(Relative::Today) => text.today.to_string(),
        Some(Relative::Tomorrow) => text.tomorrow.to_string(),
        None => {
            let weekday = text.weekday_name(date.weekday());
            match locale {
                Locale::ZhCn => format!("{} {}", date_caption(date, locale), weekday),
                Locale::EnUs => format!("{}, {}", date_caption(date, locale), weekday),
            }
        }
    }
}

/// Caption followed by a day tag, as on the collapsed picker:
/// `3月10日 今天`, `3月12日 周四`.
pub fn stay_day_label(
    date: &CalendarDate,
    reference_today: &CalendarDate,
    locale: Locale,
) -> String {
    let text = locale.text();
    let tag = match relative_day(date, reference_today) {
        Some(Relative::Today) => text.today,
        Some(Relative::Tomorrow) => text.tomorrow,
        None => text.weekday_name(date.weekday()),
    };

    match locale {
        Locale::ZhCn => format!("{} {}", date_caption(date, locale), tag),
        Locale::EnUs => format!("{}, {}", date_caption(date, locale), tag),
    }
}

pub fn nights_label(nights: u64, locale: Locale) -> String {
    match locale {
        Locale::ZhCn => format!("共 {} 晚", nights),
        Locale::EnUs if nights == 1 => "1 night".to_string(),
        Locale::EnUs => format!("{} nights", nights),
    }
}

/// One-line summary of a complete range, e.g. `3月10日 周二 - 3月15日 周日 共 5 晚`.
pub fn range_summary(
    range: &DateRange,
    reference_today: &CalendarDate,
    locale: Locale,
) -> Option<String> {
    let (start, end) = range.bounds()?;
    let nights = range.nights()?;

    Some(format!(
        "{} - {} {}",
        stay_day_label(&start, reference_today, locale),
        stay_day_label(&end, reference_today, locale),
        nights_label(nights, locale)
    ))
}

/// `2026年 三月` / `March 2026`.
pub fn month_title(cursor: &ViewCursor, locale: Locale) -> String {
    let month = locale.text().month_name(cursor.month());
    match locale {
        Locale::ZhCn => format!("{}年 {}", cursor.year(), month),
        Locale::EnUs => format!("{} {}", month, cursor.year()),
    }
}

/// `MM-DD`, used where the year is implied.
pub fn short_date(date: &CalendarDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

enum Relative {
    Today,
    Tomorrow,
}

fn relative_day(date: &CalendarDate, reference_today: &CalendarDate) -> Option<Relative> {
    match reference_today.days_until(date) {
        0 => Some(Relative::Today),
        1 => Some(Relative::Tomorrow),
        _ => None,
    }
}
