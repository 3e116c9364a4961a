//! Reduction of budget and schedule rows into a [`KpiReport`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::ratio::Ratio;
use super::types::{BudgetLine, DepartmentVariance, KpiReport, ScheduleDay, ScheduleStats};

/// Decimal places kept on externally visible ratios.
const RATIO_DP: u32 = 2;

/// Stateless KPI calculator.
pub struct KpiAggregator;

impl KpiAggregator {
    /// Computes the full KPI report for one project.
    ///
    /// Total over any input, including empty slices: ratios with a zero
    /// denominator come back as [`Ratio::Undefined`] and are named in
    /// `undefined_metrics`. Sums beyond the `Decimal` range saturate.
    #[must_use]
    pub fn compute_kpis(budget_lines: &[BudgetLine], schedule_days: &[ScheduleDay]) -> KpiReport {
        let total_planned = saturating_sum(budget_lines.iter().map(|l| l.planned));
        let total_committed = saturating_sum(budget_lines.iter().map(|l| l.committed));
        let total_actual = saturating_sum(budget_lines.iter().map(|l| l.actual));

        let burn_rate = Self::burn_rate(total_planned, total_actual);
        let cpi = Self::cpi(total_planned, total_actual);

        let schedule_stats = Self::schedule_stats(schedule_days);
        let spi = Self::spi(&schedule_stats);

        let undefined_metrics = [("burn_rate", burn_rate), ("cpi", cpi), ("spi", spi)]
            .into_iter()
            .filter(|(_, ratio)| !ratio.is_defined())
            .map(|(name, _)| name)
            .collect();

        KpiReport {
            burn_rate,
            total_planned,
            total_committed,
            total_actual,
            variance: total_planned.saturating_sub(total_actual),
            cpi,
            spi,
            variance_by_dept: Self::variance_by_department(budget_lines),
            schedule_stats,
            undefined_metrics,
        }
    }

    /// Actual over planned as a percentage, rounded to 2 places.
    #[must_use]
    pub fn burn_rate(total_planned: Decimal, total_actual: Decimal) -> Ratio {
        Ratio::of(total_actual, total_planned)
            .scaled(Decimal::ONE_HUNDRED)
            .rounded(RATIO_DP)
    }

    /// Planned over actual, rounded to 2 places.
    ///
    /// Above 1 means under budget, below 1 over budget.
    #[must_use]
    pub fn cpi(total_planned: Decimal, total_actual: Decimal) -> Ratio {
        Ratio::of(total_planned, total_actual).rounded(RATIO_DP)
    }

    /// Completed over total days, rounded to 2 places.
    #[must_use]
    pub fn spi(stats: &ScheduleStats) -> Ratio {
        Ratio::of(Decimal::from(stats.completed), Decimal::from(stats.total_days))
            .rounded(RATIO_DP)
    }

    /// Counts total, completed and delayed days.
    ///
    /// Statuses other than `completed` and `delayed` only count towards the total.
    #[must_use]
    pub fn schedule_stats(schedule_days: &[ScheduleDay]) -> ScheduleStats {
        schedule_days
            .iter()
            .fold(ScheduleStats::default(), |mut stats, day| {
                stats.total_days += 1;
                if day.is_completed() {
                    stats.completed += 1;
                } else if day.is_delayed() {
                    stats.delayed += 1;
                }
                stats
            })
    }

    /// Groups lines by department, summing rows that share a department name.
    ///
    /// Summing keeps the per-department figures consistent with the project
    /// totals: the department planned amounts always add up to `total_planned`.
    #[must_use]
    pub fn variance_by_department(
        budget_lines: &[BudgetLine],
    ) -> BTreeMap<String, DepartmentVariance> {
        let mut sums: BTreeMap<&str, (Decimal, Decimal, Decimal)> = BTreeMap::new();
        for line in budget_lines {
            let entry = sums.entry(line.department.as_str()).or_default();
            entry.0 = entry.0.saturating_add(line.planned);
            entry.1 = entry.1.saturating_add(line.committed);
            entry.2 = entry.2.saturating_add(line.actual);
        }

        sums.into_iter()
            .map(|(department, (planned, committed, actual))| {
                let percent_spent = Ratio::of(actual, planned)
                    .scaled(Decimal::ONE_HUNDRED)
                    .rounded(RATIO_DP);
                (
                    department.to_string(),
                    DepartmentVariance {
                        planned,
                        committed,
                        actual,
                        variance: planned.saturating_sub(actual),
                        percent_spent,
                    },
                )
            })
            .collect()
    }
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
