use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single expense record as shown to the presentation layer.
///
/// There is at most one expense per distinct case-insensitive category; the
/// engine merges repeat submissions into the existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque unique identifier (UUID v4), assigned at creation, never reused
    pub id: String,
    /// Free-text category label, stored with the casing of the most recent submission
    pub category: String,
    /// Non-negative amount in plain currency units (no cents handling)
    pub amount: f64,
    /// Calendar day of the last add or merge (date-only, start-of-day semantics)
    pub created_at: NaiveDate,
}

/// Derived spending summary, recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Exact sum of all amounts in view
    pub total_amount: f64,
    /// `total_amount / 30` (fixed 30-day month approximation), unrounded
    pub daily_average: f64,
    /// Up to 3 highest-amount expenses, descending, original-order ties
    pub top_expenses: Vec<Expense>,
}

impl ExpenseSummary {
    /// Daily average formatted for display with at most 2 decimal places.
    pub fn formatted_daily_average(&self) -> String {
        format!("{:.2}", self.daily_average)
    }
}

/// Outcome of submitting a category/amount pair.
///
/// Doubles as the user-facing notification payload: the engine keeps at most
/// one of these live at a time, each successful submit superseding the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MergeResult {
    /// A new expense record was appended to the store
    Created(Expense),
    /// An existing record absorbed the submission
    Updated {
        /// Display category after the merge (most recent submission's casing)
        category: String,
        /// Amount before the merge
        previous_amount: f64,
        /// Amount after the merge
        new_amount: f64,
    },
}

/// Expenses grouped under one calendar day, with the day's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub expenses: Vec<Expense>,
    pub total: f64,
}

/// Spend level of a calendar day, used for the day indicator color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpendLevel {
    /// Day total above 10,000
    High,
    /// Day total above 5,000
    Medium,
    /// Anything else, including zero
    Low,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Represents a calendar month with its associated expense data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    /// Weekday of the 1st, Monday-first (0 = Monday, ..., 6 = Sunday)
    pub first_day_of_week: u32,
}

/// Represents a single day in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// Total spent on this day
    pub total: f64,
    pub expenses: Vec<Expense>,
    pub spend_level: SpendLevel,
    pub day_type: CalendarDayType,
}

/// Represents the current focus date for calendar navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year() as u32,
        }
    }
}

/// Raw form input for a new expense submission.
///
/// Both fields arrive as text; the engine owns validation, not the form widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitExpenseRequest {
    pub category: String,
    pub amount: String,
}

/// Resolved location for the decorative header label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Display state of the decorative location label.
///
/// Lookup failures land in `Unavailable` and never affect expense data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationState {
    /// Lookup in flight
    Loading,
    /// Lookup succeeded
    Ready(LocationInfo),
    /// Lookup failed; the message is shown in place of the label
    Unavailable(String),
}
