//! KPI input rows and report types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ratio::Ratio;

/// Schedule status counted as a finished shooting day.
pub const STATUS_COMPLETED: &str = "completed";
/// Schedule status counted as a slipped shooting day.
pub const STATUS_DELAYED: &str = "delayed";

/// One department's budget allocation within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Department name; grouping is case-sensitive with no normalization.
    #[serde(rename = "dept")]
    pub department: String,
    /// Allocated budget.
    pub planned: Decimal,
    /// Obligated but not yet spent.
    pub committed: Decimal,
    /// Spent to date. May exceed `planned`.
    pub actual: Decimal,
}

impl BudgetLine {
    /// Creates a budget line.
    #[must_use]
    pub fn new(
        department: impl Into<String>,
        planned: Decimal,
        committed: Decimal,
        actual: Decimal,
    ) -> Self {
        Self {
            department: department.into(),
            planned,
            committed,
            actual,
        }
    }

    /// Planned minus actual for this line alone.
    #[must_use]
    pub fn variance(&self) -> Decimal {
        self.planned - self.actual
    }
}

/// One shooting day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Ordinal within the project's schedule.
    pub day: i32,
    /// Open-ended status tag.
    pub status: String,
    /// Scene description.
    #[serde(default)]
    pub scene: String,
    /// Shooting location.
    #[serde(default)]
    pub location: String,
}

impl ScheduleDay {
    /// Creates a schedule day with empty scene and location.
    #[must_use]
    pub fn new(day: i32, status: impl Into<String>) -> Self {
        Self {
            day,
            status: status.into(),
            scene: String::new(),
            location: String::new(),
        }
    }

    /// Whether this day counts towards SPI.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    /// Whether this day is counted as delayed.
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        self.status == STATUS_DELAYED
    }
}

/// Per-department rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentVariance {
    /// Planned amount (summed across duplicate department rows).
    pub planned: Decimal,
    /// Committed amount (summed across duplicate department rows).
    pub committed: Decimal,
    /// Actual amount (summed across duplicate department rows).
    pub actual: Decimal,
    /// Planned minus actual.
    pub variance: Decimal,
    /// Actual over planned, as a percentage rounded to 2 places.
    pub percent_spent: Ratio,
}

/// Shooting-day counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    /// All scheduled days, whatever their status.
    pub total_days: usize,
    /// Days with status `completed`.
    pub completed: usize,
    /// Days with status `delayed`.
    pub delayed: usize,
}

/// Project performance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiReport {
    /// Percentage of planned budget spent. Not clamped at 100.
    pub burn_rate: Ratio,
    /// Sum of planned amounts.
    pub total_planned: Decimal,
    /// Sum of committed amounts.
    pub total_committed: Decimal,
    /// Sum of actual amounts.
    pub total_actual: Decimal,
    /// Planned minus actual; negative when over budget.
    pub variance: Decimal,
    /// Cost performance index: planned over actual.
    pub cpi: Ratio,
    /// Schedule performance index: completed over total days.
    pub spi: Ratio,
    /// Department rollups keyed by the raw department string.
    pub variance_by_dept: BTreeMap<String, DepartmentVariance>,
    /// Shooting-day counts.
    pub schedule_stats: ScheduleStats,
    /// Names of headline ratios that fell back to the sentinel zero.
    pub undefined_metrics: Vec<&'static str>,
}
