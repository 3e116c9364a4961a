use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::kpi::{BudgetLine, ScheduleDay};

/// Budget sums for a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BudgetTotals {
    /// Sum of planned amounts.
    pub planned: Decimal,
    /// Sum of committed amounts.
    pub committed: Decimal,
    /// Sum of actual amounts.
    pub actual: Decimal,
}

impl BudgetTotals {
    /// Sums every line; duplicate departments are all counted.
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a BudgetLine>) -> Self {
        lines.into_iter().fold(Self::default(), |mut acc, line| {
            acc.planned = acc.planned.saturating_add(line.planned);
            acc.committed = acc.committed.saturating_add(line.committed);
            acc.actual = acc.actual.saturating_add(line.actual);
            acc
        })
    }

    /// Planned minus actual.
    #[must_use]
    pub fn variance(&self) -> Decimal {
        self.planned.saturating_sub(self.actual)
    }
}

/// Purchase-order (or invoice) count and amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderTotals {
    /// Number of rows.
    pub count: usize,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

impl PurchaseOrderTotals {
    /// Counts and sums the given amounts.
    #[must_use]
    pub fn from_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Self {
        amounts.into_iter().fold(Self::default(), |mut acc, amount| {
            acc.count += 1;
            acc.total_amount = acc.total_amount.saturating_add(amount);
            acc
        })
    }
}

/// Counts every distinct status string.
#[must_use]
pub fn status_breakdown<'a>(
    days: impl IntoIterator<Item = &'a ScheduleDay>,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for day in days {
        *counts.entry(day.status.clone()).or_insert(0) += 1;
    }
    counts
}

/// Schedule size and status distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    /// Number of scheduled days.
    pub total_days: usize,
    /// Count per status string.
    pub status_breakdown: BTreeMap<String, usize>,
}

impl ScheduleSummary {
    /// Summarizes a schedule.
    #[must_use]
    pub fn from_days(days: &[ScheduleDay]) -> Self {
        Self {
            total_days: days.len(),
            status_breakdown: status_breakdown(days),
        }
    }
}
