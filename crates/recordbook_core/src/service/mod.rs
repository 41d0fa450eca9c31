//! Demo use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into per-demo use-case APIs.
//! - Keep console binaries free of domain rules.

pub mod finance_service;
pub mod grading_service;
pub mod health_service;
pub mod inventory_service;
pub mod warehouse_service;

use chrono::{Local, NaiveDate};

/// Today's local calendar date, used to stamp seeded records.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
