//! Summary computation over an expense view.
use shared::{Expense, ExpenseSummary};
use std::cmp::Ordering;

/// Divisor for the daily average (fixed 30-day month approximation, not
/// calendar-aware).
const DAILY_AVERAGE_DAYS: f64 = 30.0;

/// How many top expenses the summary reports.
const TOP_EXPENSE_COUNT: usize = 3;

/// Derives the rolling summary the summary panel renders.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the summary over `view`, or `None` for an empty view.
    ///
    /// Pure function: same view, same result. The daily average is returned
    /// unrounded; display rounding is the presentation layer's concern.
    pub fn summarize(&self, view: &[Expense]) -> Option<ExpenseSummary> {
        if view.is_empty() {
            return None;
        }

        let total_amount: f64 = view.iter().map(|expense| expense.amount).sum();
        let daily_average = total_amount / DAILY_AVERAGE_DAYS;

        // Stable sort: equal amounts keep their original relative order.
        let mut top_expenses = view.to_vec();
        top_expenses.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        top_expenses.truncate(TOP_EXPENSE_COUNT);

        Some(ExpenseSummary {
            total_amount,
            daily_average,
            top_expenses,
        })
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            category: category.to_string(),
            amount,
            created_at: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
        }
    }

    #[test]
    fn test_empty_view_has_no_summary() {
        let service = SummaryService::new();
        assert!(service.summarize(&[]).is_none());
    }

    #[test]
    fn test_total_average_and_top_three() {
        let service = SummaryService::new();
        let view = vec![
            expense("1", "Rent", 400.0),
            expense("2", "Food", 100.0),
            expense("3", "Gym", 30.0),
        ];

        let summary = service.summarize(&view).unwrap();
        assert_eq!(summary.total_amount, 530.0);
        assert_eq!(summary.daily_average, 530.0 / 30.0);
        assert_eq!(summary.formatted_daily_average(), "17.67");

        let top: Vec<&str> = summary
            .top_expenses
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(top, vec!["Rent", "Food", "Gym"]);
    }

    #[test]
    fn test_top_expenses_truncates_to_three() {
        let service = SummaryService::new();
        let view = vec![
            expense("1", "A", 10.0),
            expense("2", "B", 40.0),
            expense("3", "C", 20.0),
            expense("4", "D", 30.0),
        ];

        let summary = service.summarize(&view).unwrap();
        let top: Vec<&str> = summary
            .top_expenses
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(top, vec!["B", "D", "C"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let service = SummaryService::new();
        let view = vec![
            expense("1", "First", 50.0),
            expense("2", "Second", 50.0),
            expense("3", "Third", 50.0),
        ];

        let summary = service.summarize(&view).unwrap();
        let top: Vec<&str> = summary
            .top_expenses
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(top, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_fewer_than_three_expenses() {
        let service = SummaryService::new();
        let view = vec![expense("1", "Rent", 400.0)];
        let summary = service.summarize(&view).unwrap();
        assert_eq!(summary.top_expenses.len(), 1);
    }

    #[test]
    fn test_summarize_is_pure() {
        let service = SummaryService::new();
        let view = vec![expense("1", "Rent", 400.0), expense("2", "Food", 100.0)];
        assert_eq!(service.summarize(&view), service.summarize(&view));
        // The input view is left untouched.
        assert_eq!(view[0].category, "Rent");
    }
}
