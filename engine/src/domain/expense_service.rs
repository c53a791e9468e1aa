//! Expense store and aggregation logic for the expense tracker.
use crate::domain::commands::SubmitExpenseCommand;
use crate::domain::models::expense::{normalize_category, Expense, ValidationError};
use chrono::Local;
use log::info;
use shared::MergeResult;

/// Owns the session's expense records and applies the merge rules.
///
/// Invariant: at most one record exists per distinct case-insensitive
/// category. The store is exposed as an ordered sequence, with
/// first-appearance insertion order preserved for records never merged.
pub struct ExpenseService {
    expenses: Vec<Expense>,
    /// Last merge outcome awaiting acknowledgement. Each successful submit
    /// supersedes it; validation failures leave it alone.
    pending_notification: Option<MergeResult>,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            pending_notification: None,
        }
    }

    /// Submit a category/amount pair, merging into an existing same-category
    /// record or appending a new one.
    ///
    /// A merge sums the amounts, adopts the new submission's casing, and
    /// refreshes the record to the merge date, discarding the original
    /// creation date. Validation failures abort before any state changes.
    pub fn submit(&mut self, command: SubmitExpenseCommand) -> Result<MergeResult, ValidationError> {
        let category = command.category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let amount = parse_amount(&command.amount)?;
        let date = command.date.unwrap_or_else(|| Local::now().date_naive());
        let normalized = normalize_category(category);

        let result = match self
            .expenses
            .iter_mut()
            .find(|expense| expense.normalized_category() == normalized)
        {
            Some(existing) => {
                let previous_amount = existing.amount;
                existing.amount += amount;
                existing.category = category.to_string();
                existing.created_at = date;
                info!(
                    "💰 EXPENSE: Merged {} into '{}' ({} -> {})",
                    amount, existing.category, previous_amount, existing.amount
                );
                MergeResult::Updated {
                    category: existing.category.clone(),
                    previous_amount,
                    new_amount: existing.amount,
                }
            }
            None => {
                let expense = Expense::new(category, amount, date);
                info!(
                    "💰 EXPENSE: Created '{}' with amount {}",
                    expense.category, expense.amount
                );
                let dto = shared::Expense::from(&expense);
                self.expenses.push(expense);
                MergeResult::Created(dto)
            }
        };

        self.pending_notification = Some(result.clone());
        Ok(result)
    }

    /// Empty the store unconditionally. Idempotent.
    pub fn clear(&mut self) {
        info!("💰 EXPENSE: Clearing {} expense records", self.expenses.len());
        self.expenses.clear();
        self.pending_notification = None;
    }

    /// Ordered snapshot of the current expense list, for rendering.
    pub fn expenses(&self) -> Vec<shared::Expense> {
        self.expenses.iter().map(shared::Expense::from).collect()
    }

    /// Distinct known category names in first-appearance order, for input
    /// assistance. Derived from the store, not separately kept.
    pub fn categories(&self) -> Vec<String> {
        self.expenses
            .iter()
            .map(|expense| expense.category.clone())
            .collect()
    }

    /// Take the pending notification, acknowledging it.
    pub fn take_notification(&mut self) -> Option<MergeResult> {
        self.pending_notification.take()
    }

    /// Replace the store with the demonstration data set.
    pub fn load_sample_data(&mut self) {
        let today = Local::now().date_naive();
        let samples = [
            ("Groceries", 15000.0),
            ("Rent", 40000.0),
            ("Transportation", 5000.0),
            ("Entertainment", 10000.0),
            ("Communication", 2000.0),
            ("Gym", 3000.0),
        ];
        info!("💰 EXPENSE: Loading {} sample records", samples.len());
        self.expenses = samples
            .iter()
            .map(|(category, amount)| Expense::new(*category, *amount, today))
            .collect();
        self.pending_notification = None;
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse raw amount text into a positive finite number.
///
/// Comma thousands separators are stripped before parsing, matching what the
/// form historically accepted.
fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let cleaned = raw.trim().replace(',', "");
    let amount: f64 = cleaned.parse().map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}
