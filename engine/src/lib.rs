//! # Expense Tracker Engine
//!
//! In-memory core of the expense-tracking widget. The presentation layer
//! feeds raw form input in and renders the snapshots and derived views it
//! gets back; all business rules live here.
//!
//! Services:
//! - **expense_service**: the expense store and category-merge aggregation
//! - **summary_service**: total / daily average / top-3 summary computation
//! - **calendar**: day bucketing, date filtering, and calendar month views
//! - **location_service**: decorative reverse-geocoding lookup, fully
//!   decoupled from expense data

pub mod domain;

pub use domain::{
    CalendarService, ExpenseService, LocationError, LocationService, SummaryService,
};

/// Main engine struct that orchestrates all services.
///
/// Owns the single expense store for the session; nothing here is global or
/// shared behind the caller's back.
pub struct ExpenseTracker {
    pub expense_service: ExpenseService,
    pub summary_service: SummaryService,
    pub calendar_service: CalendarService,
    pub location_service: LocationService,
}

impl ExpenseTracker {
    /// Create a new engine instance with all services.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            expense_service: ExpenseService::new(),
            summary_service: SummaryService::new(),
            calendar_service: CalendarService::new(),
            location_service: LocationService::new()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::SubmitExpenseCommand;

    fn submit(tracker: &mut ExpenseTracker, category: &str, amount: &str) {
        tracker
            .expense_service
            .submit(SubmitExpenseCommand {
                category: category.to_string(),
                amount: amount.to_string(),
                date: None,
            })
            .unwrap();
    }

    #[test]
    fn test_submit_then_summarize_and_bucket() -> anyhow::Result<()> {
        let mut tracker = ExpenseTracker::new()?;

        submit(&mut tracker, "Rent", "400");
        submit(&mut tracker, "Food", "100");
        submit(&mut tracker, "Gym", "30");

        let view = tracker.expense_service.expenses();
        let summary = tracker.summary_service.summarize(&view).unwrap();
        assert_eq!(summary.total_amount, 530.0);

        // Everything was submitted today, so one bucket holds the lot.
        let buckets = tracker.calendar_service.bucket_by_day(&view);
        assert_eq!(buckets.len(), 1);
        let bucket = buckets.values().next().unwrap();
        assert_eq!(bucket.total, 530.0);
        assert_eq!(bucket.expenses.len(), 3);

        Ok(())
    }

    #[test]
    fn test_clear_resets_everything() -> anyhow::Result<()> {
        let mut tracker = ExpenseTracker::new()?;
        submit(&mut tracker, "Rent", "400");

        tracker.expense_service.clear();

        let view = tracker.expense_service.expenses();
        assert!(view.is_empty());
        assert!(tracker.summary_service.summarize(&view).is_none());
        assert!(tracker.calendar_service.bucket_by_day(&view).is_empty());
        Ok(())
    }
}
