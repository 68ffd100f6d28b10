//! # CSV Storage Module
//!
//! File-based implementation of the storage traits. A single `expenses.csv`
//! under the data directory holds every record; mutations rewrite the whole
//! file, which keeps the implementation honest about durability (the write
//! is flushed before the caller is notified) at a scale where rewriting is
//! cheap.
//!
//! ## File format
//!
//! ```csv
//! id,amount,category,date,description,created_at
//! exp-1709620800123-af3c,12.50,Food,2024-03-05,"lunch",2024-03-05T12:01:33+00:00
//! ```
//!
//! Rows are kept ordered by `(date, created_at)`, so date-range scans stay
//! cheap without a separate index.

pub mod connection;
pub mod expense_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use expense_repository::CsvExpenseRepository;
