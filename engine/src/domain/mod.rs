//! # Domain Module
//!
//! Contains all business logic for the expense tracker engine.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how expenses are aggregated, summarized, and organized by
//! date. It operates independently of any specific UI framework.
//!
//! ## Module Organization
//!
//! - **expense_service**: Expense store and category-merge aggregation
//! - **summary_service**: Derived summary computation (total, daily average, top-3)
//! - **calendar**: Day bucketing, date filtering, and calendar month generation
//! - **location_service**: Decorative reverse-geocoding lookup, isolated from
//!   expense data
//! - **commands**: Command objects accepted by the service entry points
//! - **models**: Domain entities and validation errors

pub mod calendar;
pub mod commands;
pub mod expense_service;
pub mod location_service;
pub mod models;
pub mod summary_service;

pub use calendar::CalendarService;
pub use expense_service::ExpenseService;
pub use location_service::{LocationError, LocationService};
pub use summary_service::SummaryService;
