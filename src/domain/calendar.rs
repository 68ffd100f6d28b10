//! Calendar domain logic.
//!
//! Builds the monthly spending grid and owns the month/year focus state for
//! calendar navigation. All date arithmetic and grid construction lives
//! here; a view only renders the cells it is handed.

use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::models::{Expense, MonthToken};

/// Type of calendar cell for explicit rendering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month.
    PaddingBefore,
    /// Actual day within the month.
    MonthDay,
    /// Empty padding cell after the last day, completing the final week.
    PaddingAfter,
}

/// A single cell in the calendar grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// 1-based day number; 0 for padding cells.
    pub day: u32,
    /// Total spent on this day; 0.0 for days without expenses and padding.
    pub spent: f64,
    pub day_type: CalendarDayType,
}

/// A calendar month of whole weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub month: MonthToken,
    /// Cells in display order, always a multiple of 7. Cell 0 is the Sunday
    /// of the first displayed week.
    pub days: Vec<CalendarDay>,
    /// Weekday index (0 = Sunday) of day 1 of the month.
    pub first_weekday_offset: u32,
}

/// Calendar service handling grid generation and month navigation.
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus month for calendar navigation. Kept in memory only,
    /// never persisted.
    focus: Arc<Mutex<MonthToken>>,
}

impl CalendarService {
    /// Create a service focused on the current local month.
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            focus: Arc::new(Mutex::new(MonthToken::new(now.year(), now.month()))),
        }
    }

    /// Generate the spending grid for a month.
    ///
    /// Out-of-month expenses are ignored; in-month expenses contribute to
    /// their day's total.
    pub fn generate_calendar_month(&self, month: MonthToken, expenses: &[Expense]) -> CalendarMonth {
        let days_in_month = days_in_month(month);
        let first_offset = first_weekday_offset(month);
        let daily_totals = daily_totals(month, expenses);

        debug!(
            "🗓️ Generating calendar for {}: {} days, first weekday offset {}",
            month, days_in_month, first_offset
        );

        let total_cells = (days_in_month + first_offset).div_ceil(7) * 7;
        let mut days = Vec::with_capacity(total_cells as usize);

        for _ in 0..first_offset {
            days.push(CalendarDay { day: 0, spent: 0.0, day_type: CalendarDayType::PaddingBefore });
        }
        for day in 1..=days_in_month {
            days.push(CalendarDay {
                day,
                spent: daily_totals.get(&day).copied().unwrap_or(0.0),
                day_type: CalendarDayType::MonthDay,
            });
        }
        while days.len() < total_cells as usize {
            days.push(CalendarDay { day: 0, spent: 0.0, day_type: CalendarDayType::PaddingAfter });
        }

        CalendarMonth { month, days, first_weekday_offset: first_offset }
    }

    /// The month currently in focus.
    pub fn focus_date(&self) -> MonthToken {
        *self.focus.lock().unwrap()
    }

    /// Jump the focus to a specific month.
    pub fn set_focus_date(&self, month: MonthToken) {
        *self.focus.lock().unwrap() = month;
    }

    /// Move the focus one month back, returning the new focus.
    pub fn navigate_previous_month(&self) -> MonthToken {
        let mut focus = self.focus.lock().unwrap();
        *focus = focus.previous();
        *focus
    }

    /// Move the focus one month forward, returning the new focus.
    pub fn navigate_next_month(&self) -> MonthToken {
        let mut focus = self.focus.lock().unwrap();
        *focus = focus.next();
        *focus
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of days in a month.
pub fn days_in_month(month: MonthToken) -> u32 {
    match month.month {
        2 => if is_leap_year(month.year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday index (0 = Sunday) of day 1 of the month.
pub fn first_weekday_offset(month: MonthToken) -> u32 {
    match NaiveDate::from_ymd_opt(month.year, month.month, 1) {
        Some(date) => date.weekday().num_days_from_sunday(),
        // Unreachable for a well-formed token; align to Sunday if not.
        None => 0,
    }
}

/// Sum expense amounts per day-of-month for expenses within the month.
fn daily_totals(month: MonthToken, expenses: &[Expense]) -> HashMap<u32, f64> {
    let mut totals: HashMap<u32, f64> = HashMap::new();
    for expense in expenses {
        if month.contains(expense.date) {
            *totals.entry(expense.date.day()).or_insert(0.0) += expense.amount;
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Category;
    use chrono::{TimeZone, Utc};

    fn expense(id: &str, amount: f64, date: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            category: Category::Food,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(MonthToken::new(2025, 1)), 31);
        assert_eq!(days_in_month(MonthToken::new(2025, 4)), 30);
        assert_eq!(days_in_month(MonthToken::new(2025, 2)), 28);
        assert_eq!(days_in_month(MonthToken::new(2024, 2)), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900)); // Divisible by 100 but not 400
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_first_weekday_offset() {
        // March 2024 starts on a Friday.
        assert_eq!(first_weekday_offset(MonthToken::new(2024, 3)), 5);
        // September 2024 starts on a Sunday.
        assert_eq!(first_weekday_offset(MonthToken::new(2024, 9)), 0);
    }

    #[test]
    fn test_grid_is_whole_weeks_with_exact_day_numbers() {
        let service = CalendarService::new();

        for (year, month) in [(2024, 2), (2024, 3), (2024, 9), (2025, 2), (2025, 12)] {
            let token = MonthToken::new(year, month);
            let calendar = service.generate_calendar_month(token, &[]);

            assert_eq!(calendar.days.len() % 7, 0, "{} grid not whole weeks", token);

            let day_numbers: Vec<u32> = calendar
                .days
                .iter()
                .filter(|d| d.day_type == CalendarDayType::MonthDay)
                .map(|d| d.day)
                .collect();
            let expected: Vec<u32> = (1..=days_in_month(token)).collect();
            assert_eq!(day_numbers, expected, "{} day numbers wrong", token);
        }
    }

    #[test]
    fn test_march_2024_grid_shape() {
        let service = CalendarService::new();
        let calendar = service.generate_calendar_month(MonthToken::new(2024, 3), &[]);

        // 5 leading pads + 31 days + 6 trailing pads = 42 cells, 6 weeks.
        assert_eq!(calendar.first_weekday_offset, 5);
        assert_eq!(calendar.days.len(), 42);
        let before = calendar.days.iter().filter(|d| d.day_type == CalendarDayType::PaddingBefore).count();
        let after = calendar.days.iter().filter(|d| d.day_type == CalendarDayType::PaddingAfter).count();
        assert_eq!(before, 5);
        assert_eq!(after, 6);
    }

    #[test]
    fn test_daily_spending_totals() {
        let service = CalendarService::new();
        let expenses = vec![
            expense("a", 12.50, "2024-03-05"),
            expense("b", 40.0, "2024-03-05"),
            expense("c", 7.0, "2024-03-20"),
            expense("d", 99.0, "2024-04-01"), // outside month, ignored
        ];

        let calendar = service.generate_calendar_month(MonthToken::new(2024, 3), &expenses);
        let day = |n: u32| calendar.days.iter().find(|d| d.day == n && d.day_type == CalendarDayType::MonthDay).unwrap();

        assert_eq!(day(5).spent, 52.50);
        assert_eq!(day(20).spent, 7.0);
        assert_eq!(day(1).spent, 0.0);

        // Padding cells never carry spending.
        assert!(calendar
            .days
            .iter()
            .filter(|d| d.day_type != CalendarDayType::MonthDay)
            .all(|d| d.spent == 0.0 && d.day == 0));
    }

    #[test]
    fn test_navigation_wraps_year_boundaries() {
        let service = CalendarService::new();

        service.set_focus_date(MonthToken::new(2025, 1));
        assert_eq!(service.navigate_previous_month(), MonthToken::new(2024, 12));

        service.set_focus_date(MonthToken::new(2025, 12));
        assert_eq!(service.navigate_next_month(), MonthToken::new(2026, 1));

        service.set_focus_date(MonthToken::new(2025, 6));
        assert_eq!(service.navigate_next_month(), MonthToken::new(2025, 7));
        assert_eq!(service.focus_date(), MonthToken::new(2025, 7));
    }
}
