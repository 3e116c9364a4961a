//! Prompt builders.
//!
//! Rows are embedded as pretty-printed JSON so the model sees the same shape
//! the API returns.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use cinetrack_core::rollup::BudgetTotals;
use cinetrack_core::{BudgetLine, KpiAggregator, ScheduleDay};

/// Budget row as presented to the model, with its variance precomputed.
#[derive(Debug, Serialize)]
pub struct BudgetFeature<'a> {
    /// Department.
    pub dept: &'a str,
    /// Planned amount.
    pub planned: Decimal,
    /// Committed amount.
    pub committed: Decimal,
    /// Actual amount.
    pub actual: Decimal,
    /// Planned minus actual.
    pub variance: Decimal,
}

impl<'a> From<&'a BudgetLine> for BudgetFeature<'a> {
    fn from(line: &'a BudgetLine) -> Self {
        Self {
            dept: &line.department,
            planned: line.planned,
            committed: line.committed,
            actual: line.actual,
            variance: line.variance(),
        }
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

fn budget_json(lines: &[BudgetLine]) -> String {
    let features: Vec<BudgetFeature<'_>> = lines.iter().map(BudgetFeature::from).collect();
    pretty(&features)
}

/// Budget risk prompt.
#[must_use]
pub fn budget_risk(lines: &[BudgetLine]) -> String {
    format!(
        r#"You are a film production financial analyst. Analyze this budget data and provide risk assessment.

Budget Data:
{data}

Analyze and provide:
1. Overall risk level (low/medium/high)
2. Risk percentage (0-100)
3. Predicted budget overrun amount
4. Top 3 specific recommendations
5. Which departments are at highest risk

Respond ONLY with valid JSON in this exact format (no markdown, no extra text):
{{
    "risk_level": "low",
    "risk_percentage": 0,
    "predicted_overrun": 0,
    "at_risk_departments": [],
    "recommendations": [],
    "summary": ""
}}"#,
        data = budget_json(lines)
    )
}

/// Schedule risk prompt.
#[must_use]
pub fn schedule_risk(days: &[ScheduleDay]) -> String {
    format!(
        r#"You are a film production scheduling expert. Analyze this shooting schedule and predict delays.

Schedule Data:
{data}

Analyze and provide:
1. Delay risk level (low/medium/high)
2. Estimated delay in days
3. Completion percentage
4. Problem scenes/days
5. Top 3 recommendations

Respond ONLY with valid JSON (no markdown):
{{
    "delay_risk": "low",
    "estimated_delay_days": 0,
    "completion_percentage": 0,
    "problem_areas": [],
    "recommendations": [],
    "summary": ""
}}"#,
        data = pretty(days)
    )
}

/// Whole-project prompt, led by headline totals.
#[must_use]
pub fn project_overall(title: &str, lines: &[BudgetLine], days: &[ScheduleDay]) -> String {
    let totals = BudgetTotals::from_lines(lines);
    let stats = KpiAggregator::schedule_stats(days);

    format!(
        r#"You are an expert film production consultant. Analyze this project comprehensively.

PROJECT: {title}

PROJECT STATS:
- Budget Planned: ${planned}
- Budget Spent: ${actual}
- Total Days: {total_days}
- Days Completed: {completed}
- Days Delayed: {delayed}

BUDGET BREAKDOWN:
{budget}

SCHEDULE STATUS:
{schedule}

Provide comprehensive analysis. Respond ONLY with valid JSON (no markdown):
{{
    "project_health": "good",
    "overall_risk_score": 0,
    "budget_forecast": {{
        "status": "on budget",
        "predicted_final_cost": 0,
        "variance": 0
    }},
    "schedule_forecast": {{
        "status": "on schedule",
        "predicted_completion_date": "",
        "delay_days": 0
    }},
    "top_recommendations": [],
    "key_risks": [],
    "executive_summary": ""
}}"#,
        planned = totals.planned.round_dp(2),
        actual = totals.actual.round_dp(2),
        total_days = stats.total_days,
        completed = stats.completed,
        delayed = stats.delayed,
        budget = budget_json(lines),
        schedule = pretty(days),
    )
}

/// Free-form question prompt.
#[must_use]
pub fn question(question: &str, context: &Value) -> String {
    format!(
        "You are a film production expert. Answer this question based on the project data.\n\n\
         Question: {question}\n\n\
         Project Data:\n{data}\n\n\
         Provide a clear, concise, actionable answer (2-3 sentences).",
        data = pretty(context)
    )
}

/// Executive report prompt.
#[must_use]
pub fn executive_report(project_data: &Value) -> String {
    format!(
        "You are a film production executive. Write a professional project status report.\n\n\
         Project Data:\n{data}\n\n\
         Write a concise executive summary (3-4 paragraphs) covering:\n\
         1. Current project status\n\
         2. Budget performance\n\
         3. Schedule performance\n\
         4. Key risks and recommendations\n\n\
         Use professional business language.",
        data = pretty(project_data)
    )
}

/// Connectivity probe.
pub const HEALTH_PROBE: &str = "Reply with: OK";
