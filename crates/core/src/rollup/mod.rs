//! Totals and breakdowns for the budget, purchase-order and schedule listings.

mod totals;

pub use totals::{BudgetTotals, PurchaseOrderTotals, ScheduleSummary, status_breakdown};
