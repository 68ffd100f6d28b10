//! Error types shared across the storage and domain layers.

use thiserror::Error;

/// Errors surfaced by the storage adapter.
///
/// Every mutating store operation reports failure through this type so that
/// callers can react (retry, show a message) instead of the mutation being
/// silently dropped.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be opened or created at all.
    #[error("Expense store unavailable: {0}")]
    Unavailable(String),

    /// Reading stored records failed. Callers must treat this as "no data
    /// available yet", not as an empty store.
    #[error("Failed to read expense store: {0}")]
    Read(String),

    /// A write to the backing store failed. The store contents are unchanged.
    #[error("Failed to write expense store: {0}")]
    Write(String),

    /// An insert collided with an already-stored expense id.
    #[error("Expense already exists: {id}")]
    DuplicateKey { id: String },
}

impl StorageError {
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        StorageError::Unavailable(err.to_string())
    }

    pub fn read(err: impl std::fmt::Display) -> Self {
        StorageError::Read(err.to_string())
    }

    pub fn write(err: impl std::fmt::Display) -> Self {
        StorageError::Write(err.to_string())
    }
}

/// Field-level validation errors for expense creation.
///
/// Raised by `CreateExpenseCommand::validate` before any storage call is
/// attempted. `field` names the form field each error belongs to so a view
/// can render per-field messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
    #[error("Please select a date")]
    EmptyDate,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("Description is too long ({0} characters, max 256)")]
    DescriptionTooLong(usize),
}

impl ValidationError {
    /// The input field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyAmount
            | ValidationError::InvalidAmount(_)
            | ValidationError::AmountNotPositive => "amount",
            ValidationError::EmptyDate | ValidationError::InvalidDate(_) => "date",
            ValidationError::DescriptionTooLong(_) => "description",
        }
    }
}
