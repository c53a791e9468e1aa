//! Command objects accepted by the domain services.
use chrono::NaiveDate;

/// Command to submit a category/amount pair to the aggregation engine.
///
/// Both text fields arrive raw from the form; the engine owns validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitExpenseCommand {
    pub category: String,
    /// Raw amount text; comma thousands separators are accepted
    pub amount: String,
    /// Optional date override - uses today if not provided
    pub date: Option<NaiveDate>,
}

impl From<shared::SubmitExpenseRequest> for SubmitExpenseCommand {
    fn from(request: shared::SubmitExpenseRequest) -> Self {
        Self {
            category: request.category,
            amount: request.amount,
            date: None,
        }
    }
}
