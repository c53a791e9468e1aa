//! Calendar domain logic for the expense tracker.
//!
//! This module contains all business logic related to calendar operations:
//! grouping expenses into day buckets, filtering the expense list by a
//! selected day, the day-selection toggle, and month navigation. The UI only
//! handles presentation concerns; every date computation lives here.

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{
    CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth, DayBucket, Expense,
    SpendLevel,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Day totals above this are rendered as high spend.
const HIGH_SPEND_THRESHOLD: f64 = 10_000.0;
/// Day totals above this (up to the high threshold) are medium spend.
const MEDIUM_SPEND_THRESHOLD: f64 = 5_000.0;

/// Calendar service that handles all calendar-related business logic.
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus date for calendar navigation (month/year only).
    /// Kept in memory for the session, independent of any day selection.
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    pub fn new() -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::default())),
        }
    }

    /// Group expenses by calendar day.
    ///
    /// Keys are the calendar components of `created_at`, never an epoch
    /// comparison, so a bucket cannot shift across a local-time midnight
    /// boundary. Fully rebuilt on every call; the session data set is small
    /// enough that caching buys nothing.
    pub fn bucket_by_day(&self, expenses: &[Expense]) -> BTreeMap<NaiveDate, DayBucket> {
        let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
        for expense in expenses {
            let bucket = buckets.entry(expense.created_at).or_insert_with(|| DayBucket {
                expenses: Vec::new(),
                total: 0.0,
            });
            bucket.total += expense.amount;
            bucket.expenses.push(expense.clone());
        }
        debug!(
            "🗓️ CALENDAR: Bucketed {} expenses into {} days",
            expenses.len(),
            buckets.len()
        );
        buckets
    }

    /// View of `expenses` restricted to `selected_day`.
    ///
    /// `None` is the identity view; otherwise calendar-day equality, original
    /// order preserved.
    pub fn filter_by_day(
        &self,
        expenses: &[Expense],
        selected_day: Option<NaiveDate>,
    ) -> Vec<Expense> {
        match selected_day {
            None => expenses.to_vec(),
            Some(day) => expenses
                .iter()
                .filter(|expense| expense.created_at == day)
                .cloned()
                .collect(),
        }
    }

    /// Day-click toggle: clicking the selected day again deselects it.
    pub fn toggle_day(
        &self,
        current_selection: Option<NaiveDate>,
        clicked_day: NaiveDate,
    ) -> Option<NaiveDate> {
        if current_selection == Some(clicked_day) {
            None
        } else {
            Some(clicked_day)
        }
    }

    /// Classify a day total for the calendar's spend indicator.
    pub fn spend_level(&self, total: f64) -> SpendLevel {
        if total > HIGH_SPEND_THRESHOLD {
            SpendLevel::High
        } else if total > MEDIUM_SPEND_THRESHOLD {
            SpendLevel::Medium
        } else {
            SpendLevel::Low
        }
    }

    /// Generate a calendar month view with per-day expense data.
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: u32,
        expenses: &[Expense],
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);
        let buckets = self.bucket_by_day(expenses);

        let mut calendar_days = Vec::new();

        // Empty cells for the weekdays before the 1st.
        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                total: 0.0,
                expenses: Vec::new(),
                spend_level: SpendLevel::Low,
                day_type: CalendarDayType::PaddingBefore,
            });
        }

        for day in 1..=days_in_month {
            let bucket = NaiveDate::from_ymd_opt(year as i32, month, day)
                .and_then(|date| buckets.get(&date).cloned())
                .unwrap_or(DayBucket {
                    expenses: Vec::new(),
                    total: 0.0,
                });
            calendar_days.push(CalendarDay {
                day,
                total: bucket.total,
                spend_level: self.spend_level(bucket.total),
                expenses: bucket.expenses,
                day_type: CalendarDayType::MonthDay,
            });
        }

        debug!(
            "🗓️ CALENDAR: Generated {}/{} grid with {} cells ({} padding)",
            month,
            year,
            calendar_days.len(),
            first_day
        );

        CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// Get the number of days in a given month and year.
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year.
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Weekday of the 1st of the month, Monday-first (0 = Monday, ..., 6 = Sunday).
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            date.weekday().num_days_from_monday()
        } else {
            // Invalid date, fall back to Monday
            0
        }
    }

    /// Get the human-readable name for a month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Format a day for human-readable display, e.g. "August 25, 2025".
    pub fn format_date_for_display(&self, day: NaiveDate) -> String {
        format!(
            "{} {}, {}",
            self.month_name(day.month()),
            day.day(),
            day.year()
        )
    }

    /// Navigate to the previous month, wrapping the year boundary.
    pub fn previous_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month, wrapping the year boundary.
    pub fn next_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Get the current focus date for calendar navigation.
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date.lock().unwrap().clone()
    }

    /// Set the focus date for calendar navigation.
    pub fn set_focus_date(&self, month: u32, year: u32) -> Result<CalendarFocusDate, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month: {}. Must be between 1 and 12", month));
        }

        let new_focus_date = CalendarFocusDate { month, year };
        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }
        Ok(new_focus_date)
    }

    /// Shift the displayed month back by one. Does not touch any day
    /// selection or filter state.
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (prev_month, prev_year) = self.previous_month(current_focus.month, current_focus.year);
        // Cannot fail: previous_month only produces months 1..=12
        self.set_focus_date(prev_month, prev_year).unwrap()
    }

    /// Shift the displayed month forward by one. Does not touch any day
    /// selection or filter state.
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (next_month, next_year) = self.next_month(current_focus.month, current_focus.year);
        // Cannot fail: next_month only produces months 1..=12
        self.set_focus_date(next_month, next_year).unwrap()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, category: &str, amount: f64, date: NaiveDate) -> Expense {
        Expense {
            id: id.to_string(),
            category: category.to_string(),
            amount,
            created_at: date,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bucket_by_day_totals_and_completeness() {
        let service = CalendarService::new();
        let d1 = day(2025, 8, 20);
        let d2 = day(2025, 8, 21);
        let expenses = vec![
            expense("1", "Rent", 400.0, d1),
            expense("2", "Food", 100.0, d2),
            expense("3", "Gym", 30.0, d1),
        ];

        let buckets = service.bucket_by_day(&expenses);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&d1].total, 430.0);
        assert_eq!(buckets[&d1].expenses.len(), 2);
        assert_eq!(buckets[&d2].total, 100.0);

        // Every expense lands in exactly one bucket.
        let bucketed: usize = buckets.values().map(|b| b.expenses.len()).sum();
        assert_eq!(bucketed, expenses.len());
    }

    #[test]
    fn test_bucket_by_day_empty_input() {
        let service = CalendarService::new();
        assert!(service.bucket_by_day(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_day_none_is_identity() {
        let service = CalendarService::new();
        let expenses = vec![
            expense("1", "Rent", 400.0, day(2025, 8, 20)),
            expense("2", "Food", 100.0, day(2025, 8, 21)),
        ];
        assert_eq!(service.filter_by_day(&expenses, None), expenses);
    }

    #[test]
    fn test_filter_by_day_keeps_original_order() {
        let service = CalendarService::new();
        let d1 = day(2025, 8, 20);
        let expenses = vec![
            expense("1", "Rent", 400.0, d1),
            expense("2", "Food", 100.0, day(2025, 8, 21)),
            expense("3", "Gym", 30.0, d1),
        ];

        let filtered = service.filter_by_day(&expenses, Some(d1));
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_toggle_day_symmetry() {
        let service = CalendarService::new();
        let d = day(2025, 8, 20);

        let selected = service.toggle_day(None, d);
        assert_eq!(selected, Some(d));
        assert_eq!(service.toggle_day(selected, d), None);

        // Clicking a different day moves the selection.
        let other = day(2025, 8, 21);
        assert_eq!(service.toggle_day(selected, other), Some(other));
    }

    #[test]
    fn test_spend_level_thresholds() {
        let service = CalendarService::new();
        assert_eq!(service.spend_level(15000.0), SpendLevel::High);
        assert_eq!(service.spend_level(10000.0), SpendLevel::Medium);
        assert_eq!(service.spend_level(5000.0), SpendLevel::Low);
        assert_eq!(service.spend_level(0.0), SpendLevel::Low);
    }

    #[test]
    fn test_generate_calendar_month_padding_and_totals() {
        let service = CalendarService::new();
        // August 2025 starts on a Friday (Monday-first index 4) and has 31 days.
        let expenses = vec![
            expense("1", "Rent", 400.0, day(2025, 8, 20)),
            expense("2", "Food", 100.0, day(2025, 8, 20)),
        ];

        let month = service.generate_calendar_month(8, 2025, &expenses);
        assert_eq!(month.first_day_of_week, 4);
        assert_eq!(month.days.len(), 4 + 31);
        assert_eq!(month.days[0].day_type, CalendarDayType::PaddingBefore);

        let aug_20 = month
            .days
            .iter()
            .find(|d| d.day == 20)
            .unwrap();
        assert_eq!(aug_20.total, 500.0);
        assert_eq!(aug_20.expenses.len(), 2);
        assert_eq!(aug_20.day_type, CalendarDayType::MonthDay);
    }

    #[test]
    fn test_days_in_month_and_leap_years() {
        let service = CalendarService::new();
        assert_eq!(service.days_in_month(2, 2024), 29);
        assert_eq!(service.days_in_month(2, 2025), 28);
        assert_eq!(service.days_in_month(2, 1900), 28);
        assert_eq!(service.days_in_month(2, 2000), 29);
        assert_eq!(service.days_in_month(4, 2025), 30);
        assert_eq!(service.days_in_month(12, 2025), 31);
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        let service = CalendarService::new();
        assert_eq!(service.previous_month(1, 2025), (12, 2024));
        assert_eq!(service.next_month(12, 2025), (1, 2026));
        assert_eq!(service.previous_month(6, 2025), (5, 2025));
        assert_eq!(service.next_month(6, 2025), (7, 2025));
    }

    #[test]
    fn test_focus_date_navigation() {
        let service = CalendarService::new();
        service.set_focus_date(1, 2025).unwrap();

        let focus = service.navigate_previous_month();
        assert_eq!((focus.month, focus.year), (12, 2024));

        let focus = service.navigate_next_month();
        assert_eq!((focus.month, focus.year), (1, 2025));

        assert!(service.set_focus_date(13, 2025).is_err());
    }

    #[test]
    fn test_format_date_for_display() {
        let service = CalendarService::new();
        assert_eq!(
            service.format_date_for_display(day(2025, 8, 25)),
            "August 25, 2025"
        );
    }
}
