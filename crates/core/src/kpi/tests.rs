//! Property-based and scenario tests for the KPI aggregator.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregator::KpiAggregator;
use super::ratio::Ratio;
use super::types::{BudgetLine, ScheduleDay};

fn amount() -> impl Strategy<Value = Decimal> {
    // Cents up to ten million.
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn budget_line() -> impl Strategy<Value = BudgetLine> {
    (
        prop::sample::select(vec!["camera", "sound", "art", "Camera", "grip"]),
        amount(),
        amount(),
        amount(),
    )
        .prop_map(|(dept, planned, committed, actual)| {
            BudgetLine::new(dept, planned, committed, actual)
        })
}

fn schedule_day() -> impl Strategy<Value = ScheduleDay> {
    (
        1i32..200,
        prop::sample::select(vec!["completed", "delayed", "planned", "in_progress", "Completed"]),
    )
        .prop_map(|(day, status)| ScheduleDay::new(day, status))
}

proptest! {
    /// Total variance is exactly planned minus actual, with no rounding drift.
    #[test]
    fn test_total_variance_is_exact(lines in prop::collection::vec(budget_line(), 1..20)) {
        let report = KpiAggregator::compute_kpis(&lines, &[]);
        prop_assert_eq!(report.variance, report.total_planned - report.total_actual);
    }

    /// Department rollups add back up to the project totals.
    #[test]
    fn test_department_sums_match_totals(lines in prop::collection::vec(budget_line(), 0..20)) {
        let report = KpiAggregator::compute_kpis(&lines, &[]);

        let planned: Decimal = report.variance_by_dept.values().map(|d| d.planned).sum();
        let committed: Decimal = report.variance_by_dept.values().map(|d| d.committed).sum();
        let actual: Decimal = report.variance_by_dept.values().map(|d| d.actual).sum();

        prop_assert_eq!(planned, report.total_planned);
        prop_assert_eq!(committed, report.total_committed);
        prop_assert_eq!(actual, report.total_actual);
    }

    /// CPI never rises as actual spend grows against a fixed positive plan.
    #[test]
    fn test_cpi_non_increasing_in_actual(
        planned in 1i64..1_000_000_000,
        actual in 1i64..1_000_000_000,
        extra in 0i64..1_000_000_000,
    ) {
        let planned = Decimal::from(planned);
        let lower = KpiAggregator::cpi(planned, Decimal::from(actual));
        let higher = KpiAggregator::cpi(planned, Decimal::from(actual + extra));

        prop_assert!(higher.value() <= lower.value());
    }

    /// Burn rate is exactly 100 when spend equals a positive plan.
    #[test]
    fn test_burn_rate_exactly_100_on_plan(planned in 1i64..1_000_000_000_000) {
        let planned = Decimal::new(planned, 2);
        prop_assert_eq!(
            KpiAggregator::burn_rate(planned, planned),
            Ratio::Defined(dec!(100))
        );
    }

    /// SPI is 1 when every day is completed.
    #[test]
    fn test_spi_one_when_all_completed(days in 1usize..100) {
        let schedule: Vec<ScheduleDay> = (1..=days)
            .map(|d| ScheduleDay::new(i32::try_from(d).unwrap(), "completed"))
            .collect();

        let report = KpiAggregator::compute_kpis(&[], &schedule);
        prop_assert_eq!(report.spi, Ratio::Defined(Decimal::ONE));
    }

    /// Only the exact `completed`/`delayed` tags land in the named buckets.
    #[test]
    fn test_schedule_buckets_partition(schedule in prop::collection::vec(schedule_day(), 0..50)) {
        let stats = KpiAggregator::schedule_stats(&schedule);

        prop_assert_eq!(stats.total_days, schedule.len());
        prop_assert!(stats.completed + stats.delayed <= stats.total_days);
        prop_assert_eq!(
            stats.completed,
            schedule.iter().filter(|d| d.status == "completed").count()
        );
    }
}

mod unit_tests {
    use super::*;

    fn sample_budget() -> Vec<BudgetLine> {
        vec![
            BudgetLine::new("camera", dec!(1000), dec!(200), dec!(800)),
            BudgetLine::new("sound", dec!(500), dec!(0), dec!(600)),
        ]
    }

    #[test]
    fn test_empty_input_yields_sentinels() {
        let report = KpiAggregator::compute_kpis(&[], &[]);

        assert_eq!(report.total_planned, Decimal::ZERO);
        assert_eq!(report.total_committed, Decimal::ZERO);
        assert_eq!(report.total_actual, Decimal::ZERO);
        assert_eq!(report.variance, Decimal::ZERO);
        assert_eq!(report.burn_rate, Ratio::Undefined);
        assert_eq!(report.cpi, Ratio::Undefined);
        assert_eq!(report.spi, Ratio::Undefined);
        assert_eq!(report.burn_rate.value(), Decimal::ZERO);
        assert!(report.variance_by_dept.is_empty());
        assert_eq!(report.schedule_stats.total_days, 0);
        assert_eq!(report.schedule_stats.completed, 0);
        assert_eq!(report.schedule_stats.delayed, 0);
        assert_eq!(report.undefined_metrics, vec!["burn_rate", "cpi", "spi"]);
    }

    #[test]
    fn test_camera_and_sound_scenario() {
        let report = KpiAggregator::compute_kpis(&sample_budget(), &[]);

        assert_eq!(report.total_planned, dec!(1500));
        assert_eq!(report.total_committed, dec!(200));
        assert_eq!(report.total_actual, dec!(1400));
        assert_eq!(report.variance, dec!(100));
        assert_eq!(report.cpi, Ratio::Defined(dec!(1.07)));
        assert_eq!(report.burn_rate, Ratio::Defined(dec!(93.33)));
        assert_eq!(report.undefined_metrics, vec!["spi"]);
    }

    #[test]
    fn test_department_variance_values() {
        let report = KpiAggregator::compute_kpis(&sample_budget(), &[]);

        let camera = &report.variance_by_dept["camera"];
        assert_eq!(camera.planned, dec!(1000));
        assert_eq!(camera.actual, dec!(800));
        assert_eq!(camera.variance, dec!(200));
        assert_eq!(camera.percent_spent, Ratio::Defined(dec!(80)));

        let sound = &report.variance_by_dept["sound"];
        assert_eq!(sound.variance, dec!(-100));
        assert_eq!(sound.percent_spent, Ratio::Defined(dec!(120)));
    }

    #[test]
    fn test_schedule_scenario() {
        let schedule = vec![
            ScheduleDay::new(1, "completed"),
            ScheduleDay::new(2, "delayed"),
            ScheduleDay::new(3, "completed"),
        ];

        let report = KpiAggregator::compute_kpis(&[], &schedule);

        assert_eq!(report.schedule_stats.total_days, 3);
        assert_eq!(report.schedule_stats.completed, 2);
        assert_eq!(report.schedule_stats.delayed, 1);
        assert_eq!(report.spi, Ratio::Defined(dec!(0.67)));
    }

    #[test]
    fn test_other_statuses_only_count_in_total() {
        let schedule = vec![
            ScheduleDay::new(1, "planned"),
            ScheduleDay::new(2, "Completed"),
            ScheduleDay::new(3, "DELAYED"),
        ];

        let stats = KpiAggregator::schedule_stats(&schedule);
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.delayed, 0);

        // Days exist, none completed: a real zero, not the sentinel.
        assert_eq!(KpiAggregator::spi(&stats), Ratio::Defined(Decimal::ZERO));
    }

    #[test]
    fn test_duplicate_departments_are_summed() {
        let lines = vec![
            BudgetLine::new("camera", dec!(1000), dec!(100), dec!(800)),
            BudgetLine::new("camera", dec!(500), dec!(50), dec!(700)),
            BudgetLine::new("Camera", dec!(10), dec!(0), dec!(5)),
        ];

        let report = KpiAggregator::compute_kpis(&lines, &[]);

        assert_eq!(report.variance_by_dept.len(), 2);
        let camera = &report.variance_by_dept["camera"];
        assert_eq!(camera.planned, dec!(1500));
        assert_eq!(camera.committed, dec!(150));
        assert_eq!(camera.actual, dec!(1500));
        assert_eq!(camera.variance, Decimal::ZERO);
        assert_eq!(camera.percent_spent, Ratio::Defined(dec!(100)));
        assert_eq!(report.variance_by_dept["Camera"].planned, dec!(10));
    }

    #[test]
    fn test_zero_planned_department_uses_sentinel() {
        let lines = vec![BudgetLine::new("catering", dec!(0), dec!(0), dec!(250))];

        let report = KpiAggregator::compute_kpis(&lines, &[]);

        let catering = &report.variance_by_dept["catering"];
        assert_eq!(catering.percent_spent, Ratio::Undefined);
        assert_eq!(catering.variance, dec!(-250));
        assert_eq!(report.burn_rate, Ratio::Undefined);
        assert_eq!(report.cpi, Ratio::Defined(Decimal::ZERO));
    }

    #[test]
    fn test_burn_rate_not_clamped() {
        assert_eq!(
            KpiAggregator::burn_rate(dec!(1000), dec!(2500)),
            Ratio::Defined(dec!(250))
        );
    }

    #[test]
    fn test_no_spend_cpi_is_undefined() {
        let lines = vec![BudgetLine::new("art", dec!(900), dec!(300), dec!(0))];

        let report = KpiAggregator::compute_kpis(&lines, &[]);

        assert_eq!(report.cpi, Ratio::Undefined);
        assert_eq!(report.burn_rate, Ratio::Defined(Decimal::ZERO));
    }

    #[test]
    fn test_report_serializes_sentinels_as_zero() {
        let report = KpiAggregator::compute_kpis(&sample_budget(), &[]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["cpi"], serde_json::json!(1.07));
        assert_eq!(json["burn_rate"], serde_json::json!(93.33));
        assert_eq!(json["spi"], serde_json::json!(0.0));
        assert_eq!(json["undefined_metrics"], serde_json::json!(["spi"]));
        assert_eq!(json["schedule_stats"]["total_days"], 0);
        assert_eq!(json["variance_by_dept"]["sound"]["variance"], serde_json::json!(-100.0));
    }

    #[test]
    fn test_line_exceeding_decimal_range_saturates() {
        let lines = vec![BudgetLine::new("vfx", Decimal::MAX, Decimal::ZERO, dec!(0.5))];

        let report = KpiAggregator::compute_kpis(&lines, &[]);

        assert_eq!(report.total_planned, Decimal::MAX);
        assert_eq!(report.cpi, Ratio::Defined(Decimal::MAX));
        assert!(report.burn_rate.is_defined());
        assert_eq!(report.variance_by_dept["vfx"].planned, Decimal::MAX);
    }

    #[test]
    fn test_totals_beyond_decimal_range_saturate() {
        let lines = vec![
            BudgetLine::new("vfx", Decimal::MAX, Decimal::MAX, dec!(100)),
            BudgetLine::new("vfx", Decimal::MAX, dec!(1), dec!(100)),
            BudgetLine::new("art", dec!(10), dec!(0), Decimal::MAX),
        ];

        let report = KpiAggregator::compute_kpis(&lines, &[]);

        assert_eq!(report.total_planned, Decimal::MAX);
        assert_eq!(report.total_committed, Decimal::MAX);
        assert_eq!(report.total_actual, Decimal::MAX);
        assert_eq!(report.variance, Decimal::ZERO);
        assert_eq!(report.burn_rate, Ratio::Defined(dec!(100)));
        assert_eq!(report.cpi, Ratio::Defined(Decimal::ONE));

        let vfx = &report.variance_by_dept["vfx"];
        assert_eq!(vfx.planned, Decimal::MAX);
        assert_eq!(vfx.actual, dec!(200));
        assert_eq!(report.variance_by_dept["art"].variance, dec!(10) - Decimal::MAX);
    }
}
