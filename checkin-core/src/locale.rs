//! Display locales.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::PickerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

/// Fixed strings for one locale.
///
/// Weekday arrays are indexed by ISO weekday minus one (Monday first).
#[derive(Debug)]
pub struct LocaleText {
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub weekday_names: [&'static str; 7],
    pub weekday_headers: [&'static str; 7],
    pub month_names: [&'static str; 12],
    pub week_start: Weekday,
    pub unselected: &'static str,
    pub check_in: &'static str,
    pub check_out: &'static str,
}

static ZH_CN: LocaleText = LocaleText {
    today: "今天",
    tomorrow: "明天",
    weekday_names: ["周一", "周二", "周三", "周四", "周五", "周六", "周日"],
    weekday_headers: ["一", "二", "三", "四", "五", "六", "日"],
    month_names: [
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    week_start: Weekday::Sun,
    unselected: "未选择",
    check_in: "入住",
    check_out: "离店",
};

static EN_US: LocaleText = LocaleText {
    today: "Today",
    tomorrow: "Tomorrow",
    weekday_names: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    weekday_headers: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    week_start: Weekday::Sun,
    unselected: "not selected",
    check_in: "Check-in",
    check_out: "Check-out",
};

impl Locale {
    pub fn text(&self) -> &'static LocaleText {
        match self {
            Locale::ZhCn => &ZH_CN,
            Locale::EnUs => &EN_US,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
        }
    }
}

impl LocaleText {
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_names[weekday.num_days_from_monday() as usize]
    }

    /// `month` is 1-based; out-of-range months yield an empty string.
    pub fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|i| self.month_names.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Column headers in display order, beginning with `week_start`.
    pub fn headers_in_order(&self) -> [&'static str; 7] {
        let first = self.week_start.num_days_from_monday() as usize;
        std::array::from_fn(|col| self.weekday_headers[(first + col) % 7])
    }
}

impl FromStr for Locale {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(PickerError::Config(format!(
                "Unsupported locale '{}'. Expected zh-CN or en-US",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
