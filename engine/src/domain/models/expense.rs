//! Domain model for an expense record.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// UUID v4, assigned at creation, immutable, never reused
    pub id: String,
    /// Display category; keeps the casing of the most recent submission
    pub category: String,
    /// Amount in plain currency units; validated finite and > 0 on submit
    pub amount: f64,
    /// Day of the last add or merge (date-only semantics)
    pub created_at: NaiveDate,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64, created_at: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: category.into(),
            amount,
            created_at,
        }
    }

    /// Case-folded, trimmed category used for merge matching only, never for
    /// display.
    pub fn normalized_category(&self) -> String {
        normalize_category(&self.category)
    }
}

/// Normalize a category label for case-insensitive equality matching.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

impl From<&Expense> for shared::Expense {
    fn from(expense: &Expense) -> Self {
        shared::Expense {
            id: expense.id.clone(),
            category: expense.category.clone(),
            amount: expense.amount,
            created_at: expense.created_at,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Category is required")]
    EmptyCategory,
    #[error("Please enter a valid amount")]
    InvalidAmount,
}
