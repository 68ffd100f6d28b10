//! Input commands for domain operations.

pub mod expenses;

pub use expenses::CreateExpenseCommand;
