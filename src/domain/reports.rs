//! Pure aggregations over the expense list.
//!
//! Everything here is deterministic and synchronous: the same expense slice
//! plus the same selection state always produces the same output. Views call
//! these on every render; nothing is cached.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::domain::models::month::{month_abbrev, weekday_name};
use crate::domain::models::{Category, Expense, MonthToken};

/// Expenses of a single day, in the order of the (already sorted) input.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    /// Human-readable day header, e.g. "Tuesday, Mar 5".
    pub label: String,
    pub date: NaiveDate,
    pub expenses: Vec<Expense>,
}

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

impl CategoryTotal {
    /// Share of a grand total, in percent. 0 when the total is 0.
    pub fn share_of(&self, grand_total: f64) -> f64 {
        if grand_total > 0.0 {
            self.total / grand_total * 100.0
        } else {
            0.0
        }
    }
}

/// Distinct months selectable in the month picker, most recent first.
///
/// Always contains `today`'s month. The month after `today`'s is included
/// only when some expense is dated past the current month, so the picker can
/// reach forward without listing every future month.
pub fn available_months(expenses: &[Expense], today: NaiveDate) -> Vec<MonthToken> {
    let mut months: BTreeSet<MonthToken> =
        expenses.iter().map(|e| MonthToken::from_date(e.date)).collect();

    let current = MonthToken::from_date(today);
    let has_future = months.iter().any(|m| *m > current);

    months.insert(current);
    if has_future {
        months.insert(current.next());
    }

    months.into_iter().rev().collect()
}

/// Expenses dated within the given month.
pub fn filter_by_month(expenses: &[Expense], month: MonthToken) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect()
}

/// Sort newest-date first.
///
/// Same-date entries order by `created_at` descending, then id descending:
/// the latest-recorded expense leads its day.
pub fn sort_by_date_descending(mut expenses: Vec<Expense>) -> Vec<Expense> {
    expenses.sort_by(|a, b| {
        (b.date, b.created_at, &b.id).cmp(&(a.date, a.created_at, &a.id))
    });
    expenses
}

/// Sum of all amounts; 0 for an empty slice.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Group expenses sharing a date under a day header.
///
/// Groups appear in first-seen order of each date, so a date-descending
/// input yields newest-day-first sections; entries within a group keep the
/// input order.
pub fn group_by_day(expenses: &[Expense]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for expense in expenses {
        match groups.iter_mut().find(|g| g.date == expense.date) {
            Some(group) => group.expenses.push(expense.clone()),
            None => groups.push(DayGroup {
                label: day_label(expense.date),
                date: expense.date,
                expenses: vec![expense.clone()],
            }),
        }
    }

    groups
}

/// Per-category sums for the categories present, largest first.
///
/// Equal totals keep the order the categories were first encountered in.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Day header label, e.g. "Tuesday, Mar 5".
pub fn day_label(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        weekday_name(date.weekday()),
        month_abbrev(date.month()),
        date.day()
    )
}
