//! In-memory expense store synchronized with durable storage.

use log::{debug, info, warn};

use crate::domain::models::Expense;
use crate::error::StorageError;
use crate::storage::traits::ExpenseStorage;

/// Lifecycle of the store's in-memory list.
///
/// Lets consumers distinguish "no data loaded yet" from "loaded and
/// confirmed empty" - both would otherwise render as an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been read from storage yet.
    Uninitialized,
    /// A load is in flight.
    Loading,
    /// The in-memory list mirrors durable state.
    Ready,
}

/// Bridge between consumers and the storage adapter.
///
/// Owns the authoritative in-memory list: the list is only updated after the
/// corresponding storage operation succeeds, so it never drifts from durable
/// state outside the window of an in-flight mutation. All mutation goes
/// through [`add`](Self::add) and [`remove`](Self::remove).
pub struct ExpenseStore<S: ExpenseStorage> {
    storage: S,
    expenses: Vec<Expense>,
    state: LoadState,
}

impl<S: ExpenseStorage> ExpenseStore<S> {
    /// Create a store over the given storage. No I/O happens until
    /// [`load`](Self::load) is called.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            expenses: Vec::new(),
            state: LoadState::Uninitialized,
        }
    }

    /// Ensure the record store exists and read every expense into memory.
    ///
    /// On failure the store reverts to `Uninitialized` and keeps an empty
    /// list; a failed read means "no data available yet", not "no expenses".
    pub fn load(&mut self) -> Result<(), StorageError> {
        self.state = LoadState::Loading;

        let loaded = self
            .storage
            .initialize()
            .and_then(|_| self.storage.list_all());

        match loaded {
            Ok(expenses) => {
                info!("Loaded {} expenses from storage", expenses.len());
                self.expenses = expenses;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load expenses: {}", e);
                self.expenses.clear();
                self.state = LoadState::Uninitialized;
                Err(e)
            }
        }
    }

    /// The current in-memory list. Consumers must not mutate entries;
    /// mutation goes through `add`/`remove`.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Persist an already-validated expense, then mirror it in memory.
    ///
    /// On failure the in-memory list is untouched and the error is returned
    /// to the caller for display.
    pub fn add(&mut self, expense: Expense) -> Result<(), StorageError> {
        self.storage.insert(&expense)?;
        debug!("Added expense {} to in-memory list", expense.id);
        self.expenses.push(expense);
        Ok(())
    }

    /// Delete an expense by id, then drop it from memory.
    ///
    /// Returns Ok(false) when the id was not stored (idempotent delete); the
    /// in-memory list ends up without the id either way.
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let deleted = self.storage.delete_by_key(id)?;
        self.expenses.retain(|e| e.id != id);
        if deleted {
            debug!("Removed expense {} from in-memory list", id);
        }
        Ok(deleted)
    }
}
