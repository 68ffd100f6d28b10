//! CSV-based expense repository.

use chrono::{DateTime, NaiveDate, Utc};
use csv::{Reader, Writer};
use log::{info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use crate::domain::models::{Category, Expense};
use crate::error::StorageError;
use crate::storage::traits::ExpenseStorage;

use super::connection::{CsvConnection, EXPENSES_HEADER};

/// Expense repository persisting to a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvExpenseRepository {
    connection: CsvConnection,
}

impl CsvExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read every expense from the file.
    fn read_expenses(&self) -> Result<Vec<Expense>, StorageError> {
        self.connection.ensure_expenses_file_exists()?;

        let file_path = self.connection.expenses_file_path();
        let file = File::open(&file_path).map_err(StorageError::read)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut expenses = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result.map_err(StorageError::read)?;
            expenses.push(Self::parse_record(&record, row)?);
        }

        Ok(expenses)
    }

    /// Parse one CSV record into an expense.
    ///
    /// An unknown category name degrades to `Other` with a warning, matching
    /// how the product renders unknown categories. A malformed date or
    /// timestamp is corruption and fails the whole read.
    fn parse_record(record: &csv::StringRecord, row: usize) -> Result<Expense, StorageError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let id = field(0).to_string();
        if id.is_empty() {
            return Err(StorageError::read(format!("row {}: missing expense id", row + 1)));
        }

        let amount = field(1)
            .parse::<f64>()
            .map_err(|_| StorageError::read(format!("row {}: invalid amount '{}'", row + 1, field(1))))?;

        let category = match Category::parse(field(2)) {
            Some(category) => category,
            None => {
                warn!("Unknown category '{}' on row {}, treating as Other", field(2), row + 1);
                Category::Other
            }
        };

        let date = NaiveDate::parse_from_str(field(3), "%Y-%m-%d")
            .map_err(|_| StorageError::read(format!("row {}: invalid date '{}'", row + 1, field(3))))?;

        let created_at = DateTime::parse_from_rfc3339(field(5))
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                StorageError::read(format!("row {}: invalid created_at '{}'", row + 1, field(5)))
            })?;

        Ok(Expense {
            id,
            amount,
            category,
            date,
            description: field(4).to_string(),
            created_at,
        })
    }

    /// Write every expense back to the file, replacing its contents.
    ///
    /// Rows are kept ordered by `(date, created_at)` so date-range scans of
    /// the raw file stay cheap.
    fn write_expenses(&self, expenses: &mut Vec<Expense>) -> Result<(), StorageError> {
        expenses.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));

        let file_path = self.connection.expenses_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .map_err(StorageError::write)?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(EXPENSES_HEADER).map_err(StorageError::write)?;
        for expense in expenses.iter() {
            csv_writer
                .write_record(&[
                    expense.id.as_str(),
                    &expense.amount.to_string(),
                    expense.category.name(),
                    &expense.date.format("%Y-%m-%d").to_string(),
                    expense.description.as_str(),
                    &expense.created_at.to_rfc3339(),
                ])
                .map_err(StorageError::write)?;
        }

        csv_writer.flush().map_err(StorageError::write)?;
        Ok(())
    }
}

impl ExpenseStorage for CsvExpenseRepository {
    fn initialize(&self) -> Result<(), StorageError> {
        self.connection.ensure_expenses_file_exists()
    }

    fn list_all(&self) -> Result<Vec<Expense>, StorageError> {
        self.read_expenses()
    }

    fn insert(&self, expense: &Expense) -> Result<(), StorageError> {
        let mut expenses = self.read_expenses()?;

        if expenses.iter().any(|e| e.id == expense.id) {
            return Err(StorageError::DuplicateKey { id: expense.id.clone() });
        }

        expenses.push(expense.clone());
        self.write_expenses(&mut expenses)?;

        info!("Stored expense {} ({} {:.2})", expense.id, expense.category, expense.amount);
        Ok(())
    }

    fn delete_by_key(&self, id: &str) -> Result<bool, StorageError> {
        let mut expenses = self.read_expenses()?;
        let original_len = expenses.len();
        expenses.retain(|e| e.id != id);

        if expenses.len() == original_len {
            // Idempotent delete: absent key is a successful no-op.
            return Ok(false);
        }

        self.write_expenses(&mut expenses)?;
        info!("Deleted expense {}", id);
        Ok(true)
    }
}
