//! Commands for creating expenses from raw form input.

use crate::domain::models::{Category, Expense};
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};

/// Maximum description length accepted at creation.
pub const MAX_DESCRIPTION_LENGTH: usize = 256;

/// Raw input for creating an expense, as captured from an entry form.
///
/// Fields arrive as strings on purpose: validation owns the parsing, so the
/// store never sees an expense that was not fully validated.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExpenseCommand {
    /// Amount as typed, e.g. "12.50".
    pub amount: String,
    /// Selected category; defaults to `Category::default_for_new()` when None.
    pub category: Option<Category>,
    /// Date as typed, `YYYY-MM-DD`.
    pub date: String,
    /// Optional free-text note.
    pub description: String,
}

impl CreateExpenseCommand {
    /// Validate the raw input and build the expense to store.
    ///
    /// Returns every field-level error at once so a form can display them
    /// per-field. No storage operation happens here; on `Err` the caller
    /// must not attempt one.
    pub fn validate(&self, created_at: DateTime<Utc>) -> Result<Expense, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let amount = if self.amount.trim().is_empty() {
            errors.push(ValidationError::EmptyAmount);
            None
        } else {
            match self.amount.trim().parse::<f64>() {
                Ok(value) if value > 0.0 => Some(value),
                Ok(_) => {
                    errors.push(ValidationError::AmountNotPositive);
                    None
                }
                Err(_) => {
                    errors.push(ValidationError::InvalidAmount(self.amount.clone()));
                    None
                }
            }
        };

        let date = if self.date.trim().is_empty() {
            errors.push(ValidationError::EmptyDate);
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.push(ValidationError::InvalidDate(self.date.clone()));
                    None
                }
            }
        };

        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.push(ValidationError::DescriptionTooLong(self.description.chars().count()));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Both unwraps guarded by the errors check above.
        let amount = amount.expect("validated amount");
        let date = date.expect("validated date");

        Ok(Expense {
            id: Expense::generate_id(created_at.timestamp_millis().max(0) as u64),
            amount,
            category: self.category.unwrap_or_else(Category::default_for_new),
            date,
            description: self.description.clone(),
            created_at,
        })
    }
}
