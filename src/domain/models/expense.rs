//! Domain model for an expense.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Spending category for an expense.
///
/// `Health` is recognized for display purposes (stored data may carry it)
/// but is intentionally absent from [`Category::selectable`]: the source
/// product never offered it at creation time, and changing the creatable set
/// is a product decision. It also has no dedicated color, only the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Rent,
    Entertainment,
    Health,
    Shopping,
    Other,
}

impl Category {
    /// Categories offered when creating an expense.
    pub fn selectable() -> [Category; 6] {
        [
            Category::Food,
            Category::Transportation,
            Category::Rent,
            Category::Entertainment,
            Category::Shopping,
            Category::Other,
        ]
    }

    /// Default category for new expenses when none is picked.
    pub fn default_for_new() -> Category {
        Category::Food
    }

    /// Stable display name, also used as the stored representation.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Rent => "Rent",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    /// Emoji used next to an expense row.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transportation => "🚗",
            Category::Rent => "💡",
            Category::Entertainment => "🎬",
            Category::Health => "🏥",
            Category::Shopping => "🛍️",
            Category::Other => "📌",
        }
    }

    /// Hex color for the category breakdown bar.
    ///
    /// `Health` has no color of its own and renders with the fallback grey.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#0af244ff",
            Category::Transportation => "#4ecdc4",
            Category::Rent => "#848484ff",
            Category::Entertainment => "#1bb7e7ff",
            Category::Shopping => "#f30400ff",
            Category::Other => "#ccfc0aff",
            Category::Health => "#cccccc",
        }
    }

    /// Parse a stored category name. Returns None for unknown names;
    /// the storage layer decides how to degrade.
    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "Food" => Some(Category::Food),
            "Transportation" => Some(Category::Transportation),
            "Rent" => Some(Category::Rent),
            "Entertainment" => Some(Category::Entertainment),
            "Health" => Some(Category::Health),
            "Shopping" => Some(Category::Shopping),
            "Other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded expense.
///
/// Immutable once created: there is no edit operation, only hard delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque unique identifier, assigned at creation, used as storage key.
    pub id: String,
    /// Strictly positive amount in the implicit single currency.
    pub amount: f64,
    pub category: Category,
    /// Calendar date the expense occurred on (no time-of-day semantics).
    pub date: NaiveDate,
    /// Optional note; empty string means "no description".
    pub description: String,
    /// Record creation timestamp, for audit and ordering only.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Generate a unique expense ID from a creation timestamp.
    /// Format: exp-<epoch_millis>-<hex suffix>
    /// Example: exp-1709620800123-af3c
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("exp-{}-{}", timestamp_ms, Self::generate_random_suffix(4))
    }

    /// Generate a random hex suffix for expense IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }

    /// Human-readable date for an expense row, e.g. "Mar 5, 2024".
    pub fn display_date(&self) -> String {
        use super::month::month_abbrev;
        use chrono::Datelike;
        format!(
            "{} {}, {}",
            month_abbrev(self.date.month()),
            self.date.day(),
            self.date.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_categories_exclude_health() {
        let selectable = Category::selectable();
        assert_eq!(selectable.len(), 6);
        assert!(!selectable.contains(&Category::Health));
        assert!(selectable.contains(&Category::Other));
    }

    #[test]
    fn test_category_name_round_trip() {
        for category in [
            Category::Food,
            Category::Transportation,
            Category::Rent,
            Category::Entertainment,
            Category::Health,
            Category::Shopping,
            Category::Other,
        ] {
            assert_eq!(Category::parse(category.name()), Some(category));
        }
        assert_eq!(Category::parse("Groceries"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_health_uses_fallback_color() {
        assert_eq!(Category::Health.color(), "#cccccc");
        // Every category still renders an icon, including Health.
        assert_eq!(Category::Health.icon(), "🏥");
    }

    #[test]
    fn test_generate_id_format() {
        let id = Expense::generate_id(1709620800123);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "exp");
        assert_eq!(parts[1], "1709620800123");
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_display_date() {
        let expense = Expense {
            id: "exp-1-a".to_string(),
            amount: 12.50,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            description: String::new(),
            created_at: Utc::now(),
        };
        assert_eq!(expense.display_date(), "Mar 5, 2024");
    }
}
