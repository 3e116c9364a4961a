//! Key performance indicators for a film project.
//!
//! Everything here is a pure function over caller-owned snapshots of budget
//! and schedule rows. Reports are rebuilt on every call and never cached.

pub mod aggregator;
pub mod ratio;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregator::KpiAggregator;
pub use ratio::Ratio;
pub use types::{
    BudgetLine, DepartmentVariance, KpiReport, STATUS_COMPLETED, STATUS_DELAYED, ScheduleDay,
    ScheduleStats,
};
