//! # Expense Tracker
//!
//! A small local-first expense tracker: record expenses (amount, category,
//! date, note), browse them grouped by day and month, break spending down by
//! category, and render a monthly calendar of daily totals. Persistence is a
//! local CSV record store; there is no server and no sync.
//!
//! The crate is a library consumed by a presentation layer:
//! - Uses synchronous operations throughout (no async/await)
//! - Mutations go through [`domain::ExpenseStore`], which keeps its
//!   in-memory list consistent with durable storage
//! - Derivations ([`domain::reports`], [`domain::CalendarService`]) are pure
//!   and recomputed per call

pub mod domain;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    CalendarDay, CalendarDayType, CalendarMonth, CalendarService, Category,
    CreateExpenseCommand, Expense, ExpenseStore, LoadState, MonthToken,
};
pub use error::{StorageError, ValidationError};
pub use storage::CsvConnection;

use storage::csv::CsvExpenseRepository;
use storage::traits::Connection;

/// Main entry point wiring storage, the expense store, and the calendar
/// service together.
pub struct ExpenseTracker {
    pub store: ExpenseStore<CsvExpenseRepository>,
    pub calendar: CalendarService,
}

impl ExpenseTracker {
    /// Create a tracker over an explicit connection and load stored
    /// expenses eagerly.
    pub fn new(connection: CsvConnection) -> Result<Self, StorageError> {
        let mut store = ExpenseStore::new(connection.create_expense_repository());
        store.load()?;

        Ok(Self {
            store,
            calendar: CalendarService::new(),
        })
    }

    /// Create a tracker over the platform data directory.
    pub fn with_default_storage() -> Result<Self, StorageError> {
        Self::new(CsvConnection::with_default_directory()?)
    }

    /// Render the calendar for the month currently in focus.
    pub fn calendar_month(&self) -> CalendarMonth {
        let focus = self.calendar.focus_date();
        self.calendar.generate_calendar_month(focus, self.store.expenses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_tracker_end_to_end() -> Result<()> {
        let temp = TempDir::new()?;
        let connection = CsvConnection::new(temp.path())?;
        let mut tracker = ExpenseTracker::new(connection.clone())?;
        assert_eq!(tracker.store.state(), LoadState::Ready);

        // Record an expense through the validation flow.
        let command = CreateExpenseCommand {
            amount: "12.50".to_string(),
            category: Some(Category::Food),
            date: "2024-03-05".to_string(),
            description: "lunch".to_string(),
        };
        let expense = command.validate(chrono::Utc::now()).expect("valid input");
        let id = expense.id.clone();
        tracker.store.add(expense)?;

        // The calendar for March 2024 shows the spending on day 5.
        tracker.calendar.set_focus_date(MonthToken::new(2024, 3));
        let calendar = tracker.calendar_month();
        let day5 = calendar
            .days
            .iter()
            .find(|d| d.day == 5 && d.day_type == CalendarDayType::MonthDay)
            .unwrap();
        assert_eq!(day5.spent, 12.50);

        // A fresh tracker over the same directory sees the stored expense.
        let reopened = ExpenseTracker::new(connection)?;
        assert_eq!(reopened.store.expenses().len(), 1);

        // Hard delete, idempotently.
        assert!(tracker.store.remove(&id)?);
        assert!(!tracker.store.remove(&id)?);
        assert!(tracker.store.expenses().is_empty());
        Ok(())
    }
}
