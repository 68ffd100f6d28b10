//! Calendar-month value type and name tables.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A specific calendar month, the `YYYY-MM` selection token.
///
/// Ordering is chronological, which for four-digit years matches the
/// lexicographic ordering of the `YYYY-MM` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthToken {
    pub year: i32,
    /// 1 = January ... 12 = December
    pub month: u32,
}

impl MonthToken {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
        Self { year, month }
    }

    /// The month a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// The next calendar month, wrapping the year boundary.
    pub fn next(&self) -> MonthToken {
        if self.month == 12 {
            MonthToken { year: self.year + 1, month: 1 }
        } else {
            MonthToken { year: self.year, month: self.month + 1 }
        }
    }

    /// The previous calendar month, wrapping the year boundary.
    pub fn previous(&self) -> MonthToken {
        if self.month == 1 {
            MonthToken { year: self.year - 1, month: 12 }
        } else {
            MonthToken { year: self.year, month: self.month - 1 }
        }
    }

    /// True if the given date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Human-readable label, e.g. "March 2024".
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for MonthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month token: {}", s))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| format!("Invalid year in month token: {}", s))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| format!("Invalid month in month token: {}", s))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Month out of range in token: {}", s));
        }
        Ok(MonthToken { year, month })
    }
}

/// Full month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Abbreviated month name for a 1-based month number.
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

/// Full weekday name, Sunday-first to match the calendar grid.
pub fn weekday_name(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Sun => "Sunday",
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let token = MonthToken::new(2024, 3);
        assert_eq!(token.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<MonthToken>().unwrap(), token);
        assert_eq!("2024-12".parse::<MonthToken>().unwrap(), MonthToken::new(2024, 12));

        assert!("2024".parse::<MonthToken>().is_err());
        assert!("2024-13".parse::<MonthToken>().is_err());
        assert!("2024-00".parse::<MonthToken>().is_err());
        assert!("abcd-03".parse::<MonthToken>().is_err());
    }

    #[test]
    fn test_ordering_matches_token_strings() {
        let a = MonthToken::new(2024, 3);
        let b = MonthToken::new(2024, 11);
        let c = MonthToken::new(2025, 1);
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string() && b.to_string() < c.to_string());
    }

    #[test]
    fn test_navigation_wraps_year_boundaries() {
        assert_eq!(MonthToken::new(2024, 12).next(), MonthToken::new(2025, 1));
        assert_eq!(MonthToken::new(2024, 6).next(), MonthToken::new(2024, 7));
        assert_eq!(MonthToken::new(2025, 1).previous(), MonthToken::new(2024, 12));
        assert_eq!(MonthToken::new(2024, 6).previous(), MonthToken::new(2024, 5));
    }

    #[test]
    fn test_contains() {
        let token = MonthToken::new(2024, 3);
        assert!(token.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(token.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!token.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!token.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_label() {
        assert_eq!(MonthToken::new(2024, 3).label(), "March 2024");
        assert_eq!(MonthToken::new(2025, 12).label(), "December 2025");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid Month");
        assert_eq!(month_abbrev(3), "Mar");
        assert_eq!(month_abbrev(9), "Sep");
    }
}
