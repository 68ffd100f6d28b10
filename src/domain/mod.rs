//! Domain layer: models, commands, the expense store, and pure derivations.

pub mod calendar;
pub mod commands;
pub mod expense_store;
pub mod models;
pub mod reports;

pub use calendar::{CalendarDay, CalendarDayType, CalendarMonth, CalendarService};
pub use commands::CreateExpenseCommand;
pub use expense_store::{ExpenseStore, LoadState};
pub use models::{Category, Expense, MonthToken};
