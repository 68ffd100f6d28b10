//! Storage abstraction traits.
//!
//! These traits let the domain layer work against any record-store backend
//! without modification. All operations are synchronous; the backing engine
//! serializes its own writes.

use crate::domain::models::Expense;
use crate::error::StorageError;

/// Interface for durable expense storage, keyed by expense id.
///
/// There is deliberately no update/upsert operation: expenses are immutable
/// once created and the product has no edit feature.
pub trait ExpenseStorage: Send + Sync {
    /// Idempotently ensure the record store exists (create-if-absent).
    fn initialize(&self) -> Result<(), StorageError>;

    /// Return every stored expense. Order is unspecified; callers re-sort.
    ///
    /// A `StorageError::Read` means "no data available yet", never "zero
    /// expenses".
    fn list_all(&self) -> Result<Vec<Expense>, StorageError>;

    /// Store a new expense. The record is durable before this returns.
    ///
    /// Fails with `StorageError::DuplicateKey` if the id is already stored.
    fn insert(&self, expense: &Expense) -> Result<(), StorageError>;

    /// Delete an expense by id.
    ///
    /// Returns Ok(true) if a record was deleted, Ok(false) if the key did
    /// not exist (idempotent delete).
    fn delete_by_key(&self, id: &str) -> Result<bool, StorageError>;
}

/// Interface for storage connections.
///
/// Abstracts the concrete backend and provides factory methods for creating
/// repositories, so consumers can be wired up without knowing the
/// implementation.
pub trait Connection: Send + Sync + Clone {
    /// The type of ExpenseStorage this connection creates.
    type ExpenseRepository: ExpenseStorage;

    /// Create a new expense repository for this connection.
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
}
