//! Structured analyses parsed from model replies, with their fallbacks.
//!
//! Every field defaults when the model omits it, so a reply that is valid JSON
//! but incomplete still parses. Unknown fields are ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;

const UNKNOWN: &str = "unknown";
const SUMMARY_UNAVAILABLE: &str = "AI service unavailable";
const SUMMARY_ERROR: &str = "AI service error";
const ADVICE_CONFIGURE: &str = "Configure GEMINI_API_KEY in .env";
const ADVICE_RETRY: &str = "Unable to get AI analysis";

fn summary_for(error: &NarrativeError) -> &'static str {
    match error {
        NarrativeError::NotConfigured => SUMMARY_UNAVAILABLE,
        _ => SUMMARY_ERROR,
    }
}

fn advice_for(error: &NarrativeError) -> &'static str {
    match error {
        NarrativeError::NotConfigured => ADVICE_CONFIGURE,
        _ => ADVICE_RETRY,
    }
}

/// Budget risk assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRiskAnalysis {
    /// Set only on fallback payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// `low`, `medium`, `high` or `unknown`.
    pub risk_level: String,
    /// 0-100.
    pub risk_percentage: Decimal,
    /// Predicted overrun amount.
    pub predicted_overrun: Decimal,
    /// Departments flagged by the model.
    pub at_risk_departments: Vec<String>,
    /// Suggested actions.
    pub recommendations: Vec<String>,
    /// One-paragraph summary.
    pub summary: String,
}

impl BudgetRiskAnalysis {
    /// Payload returned when the model could not be used.
    #[must_use]
    pub fn fallback(error: &NarrativeError) -> Self {
        Self {
            error: Some(error.to_string()),
            risk_level: UNKNOWN.to_string(),
            recommendations: vec![advice_for(error).to_string()],
            summary: summary_for(error).to_string(),
            ..Self::default()
        }
    }
}

/// Schedule delay assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRiskAnalysis {
    /// Set only on fallback payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// `low`, `medium`, `high` or `unknown`.
    pub delay_risk: String,
    /// Estimated slip in days.
    pub estimated_delay_days: Decimal,
    /// 0-100.
    pub completion_percentage: Decimal,
    /// Scenes or days flagged by the model.
    pub problem_areas: Vec<String>,
    /// Suggested actions.
    pub recommendations: Vec<String>,
    /// One-paragraph summary.
    pub summary: String,
}

impl ScheduleRiskAnalysis {
    /// Payload returned when the model could not be used.
    #[must_use]
    pub fn fallback(error: &NarrativeError) -> Self {
        let advice = match error {
            NarrativeError::NotConfigured => "Configure GEMINI_API_KEY",
            _ => ADVICE_RETRY,
        };
        Self {
            error: Some(error.to_string()),
            delay_risk: UNKNOWN.to_string(),
            recommendations: vec![advice.to_string()],
            summary: summary_for(error).to_string(),
            ..Self::default()
        }
    }
}

/// Budget outlook inside a project analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetForecast {
    /// e.g. `on budget`, `over budget`.
    pub status: String,
    /// Forecast final cost.
    pub predicted_final_cost: Decimal,
    /// Forecast variance.
    pub variance: Decimal,
}

/// Schedule outlook inside a project analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleForecast {
    /// e.g. `on schedule`, `behind`.
    pub status: String,
    /// Free-form date given by the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_completion_date: Option<String>,
    /// Forecast slip in days.
    pub delay_days: Decimal,
}

/// Whole-project assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAnalysis {
    /// Set only on fallback payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// e.g. `good`, `at risk`, `unknown`.
    pub project_health: String,
    /// 0-100.
    pub overall_risk_score: Decimal,
    /// Budget outlook.
    pub budget_forecast: BudgetForecast,
    /// Schedule outlook.
    pub schedule_forecast: ScheduleForecast,
    /// Suggested actions.
    pub top_recommendations: Vec<String>,
    /// Main risks.
    pub key_risks: Vec<String>,
    /// Executive summary.
    pub executive_summary: String,
}

impl ProjectAnalysis {
    /// Payload returned when the model could not be used.
    #[must_use]
    pub fn fallback(error: &NarrativeError) -> Self {
        let (advice, summary) = match error {
            NarrativeError::NotConfigured => (ADVICE_CONFIGURE, SUMMARY_UNAVAILABLE),
            _ => (SUMMARY_ERROR, "Unable to perform AI analysis"),
        };
        Self {
            error: Some(error.to_string()),
            project_health: UNKNOWN.to_string(),
            budget_forecast: BudgetForecast {
                status: UNKNOWN.to_string(),
                ..BudgetForecast::default()
            },
            schedule_forecast: ScheduleForecast {
                status: UNKNOWN.to_string(),
                ..ScheduleForecast::default()
            },
            top_recommendations: vec![advice.to_string()],
            executive_summary: summary.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_budget_fallback_when_unconfigured() {
        let analysis = BudgetRiskAnalysis::fallback(&NarrativeError::NotConfigured);
        assert_eq!(analysis.error.as_deref(), Some("Gemini AI not configured"));
        assert_eq!(analysis.risk_level, "unknown");
        assert_eq!(analysis.risk_percentage, Decimal::ZERO);
        assert_eq!(analysis.recommendations, vec!["Configure GEMINI_API_KEY in .env"]);
        assert_eq!(analysis.summary, "AI service unavailable");
    }

    #[test]
    fn test_schedule_fallback_on_error() {
        let analysis = ScheduleRiskAnalysis::fallback(&NarrativeError::Timeout(60));
        assert_eq!(analysis.error.as_deref(), Some("Request timed out after 60s"));
        assert_eq!(analysis.delay_risk, "unknown");
        assert_eq!(analysis.recommendations, vec!["Unable to get AI analysis"]);
        assert_eq!(analysis.summary, "AI service error");
    }

    #[test]
    fn test_project_fallback_keeps_forecast_shape() {
        let analysis = ProjectAnalysis::fallback(&NarrativeError::EmptyResponse);
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["project_health"], "unknown");
        assert_eq!(value["budget_forecast"]["status"], "unknown");
        assert_eq!(value["schedule_forecast"]["status"], "unknown");
        assert_eq!(value["executive_summary"], "Unable to perform AI analysis");
    }

    #[test]
    fn test_partial_reply_fills_defaults() {
        let analysis: BudgetRiskAnalysis = serde_json::from_value(json!({
            "risk_level": "high",
            "risk_percentage": 72.5,
            "at_risk_departments": ["Camera"],
            "confidence": "ignored"
        }))
        .unwrap();
        assert_eq!(analysis.risk_level, "high");
        assert_eq!(analysis.risk_percentage, dec!(72.5));
        assert_eq!(analysis.predicted_overrun, Decimal::ZERO);
        assert!(analysis.error.is_none());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_model_reply_omits_error_field() {
        let value = serde_json::to_value(ScheduleRiskAnalysis::default()).unwrap();
        assert!(value.get("error").is_none());
    }
}
