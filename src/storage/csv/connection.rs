//! Connection handling for the CSV storage backend.

use crate::error::StorageError;
use crate::storage::traits::Connection;
use directories::ProjectDirs;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::expense_repository::CsvExpenseRepository;

/// Header row of the expenses file.
pub(crate) const EXPENSES_HEADER: [&str; 6] =
    ["id", "amount", "category", "date", "description", "created_at"];

const EXPENSES_FILE_NAME: &str = "expenses.csv";

/// Connection to a CSV data directory.
///
/// Cheap to clone; repositories created from the same connection share the
/// same base directory.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at an explicit directory, creating it if
    /// needed.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory).map_err(|e| {
            StorageError::unavailable(format!(
                "cannot create data directory {}: {}",
                base_directory.display(),
                e
            ))
        })?;
        debug!("CSV connection rooted at {}", base_directory.display());
        Ok(Self { base_directory })
    }

    /// Create a connection rooted at the platform data directory
    /// (e.g. `~/.local/share/expense-tracker` on Linux).
    pub fn with_default_directory() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("", "", "expense-tracker").ok_or_else(|| {
            StorageError::unavailable("no home directory available to place the data directory")
        })?;
        Self::new(dirs.data_dir())
    }

    /// The directory holding the expenses file.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Full path of the expenses file.
    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join(EXPENSES_FILE_NAME)
    }

    /// Create the expenses file with its header if it does not exist yet.
    /// Idempotent.
    pub fn ensure_expenses_file_exists(&self) -> Result<(), StorageError> {
        let path = self.expenses_file_path();
        if path.exists() {
            return Ok(());
        }

        info!("Creating expenses file at {}", path.display());
        let mut writer = csv::Writer::from_path(&path).map_err(|e| {
            StorageError::unavailable(format!("cannot create {}: {}", path.display(), e))
        })?;
        writer
            .write_record(EXPENSES_HEADER)
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| {
                StorageError::unavailable(format!("cannot write header to {}: {}", path.display(), e))
            })?;
        Ok(())
    }
}

impl Connection for CsvConnection {
    type ExpenseRepository = CsvExpenseRepository;

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        CsvExpenseRepository::new(self.clone())
    }
}
