//! Core business logic for Cinetrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types and calculations live here.
//!
//! # Modules
//!
//! - `kpi` - Budget and schedule performance indicators (burn rate, CPI, SPI, variance)
//! - `rollup` - Simple totals and breakdowns served by the listing routes

pub mod kpi;
pub mod rollup;

pub use kpi::{
    BudgetLine, DepartmentVariance, KpiAggregator, KpiReport, Ratio, ScheduleDay, ScheduleStats,
};
