//! Narrative service: prompts in, advisory analyses out.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use cinetrack_core::{BudgetLine, ScheduleDay};
use cinetrack_shared::GeminiConfig;

use crate::analysis::{BudgetRiskAnalysis, ProjectAnalysis, ScheduleRiskAnalysis};
use crate::error::NarrativeError;
use crate::gemini::GeminiClient;
use crate::generator::NarrativeGenerator;
use crate::{prompt, reply};

const PROVIDER: &str = "Google Gemini";

/// Result of probing the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NarrativeHealth {
    /// The model answered.
    Connected {
        /// Provider name.
        ai_provider: String,
        /// Model identifier.
        model: String,
        /// Status line.
        message: String,
    },
    /// The model is unconfigured or unreachable.
    Error {
        /// Failure description.
        message: String,
    },
}

/// Narrative analysis over an optional text generator.
///
/// Without a generator every operation answers immediately with its fallback.
#[derive(Clone, Default)]
pub struct NarrativeService {
    generator: Option<Arc<dyn NarrativeGenerator>>,
}

impl std::fmt::Debug for NarrativeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrativeService")
            .field("model", &self.generator.as_ref().map(|g| g.model()))
            .finish()
    }
}

impl NarrativeService {
    /// Creates a service backed by `generator`.
    #[must_use]
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Creates a service that always falls back.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// Creates a Gemini-backed service, or an unconfigured one when no key is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, NarrativeError> {
        match GeminiClient::from_config(config) {
            Ok(client) => {
                info!(model = %config.model, "Narrative service configured");
                Ok(Self::new(Arc::new(client)))
            }
            Err(NarrativeError::NotConfigured) => {
                warn!("GEMINI_API_KEY not set, AI routes will return fallbacks");
                Ok(Self::unconfigured())
            }
            Err(e) => Err(e),
        }
    }

    /// Whether a generator is attached.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let generator = self.generator.as_ref().ok_or(NarrativeError::NotConfigured)?;
        generator.generate(prompt).await
    }

    async fn analyze<T: serde::de::DeserializeOwned>(
        &self,
        prompt: &str,
    ) -> Result<T, NarrativeError> {
        let text = self.generate(prompt).await?;
        reply::parse_reply(&text)
    }

    /// Budget risk assessment; never fails.
    pub async fn analyze_budget_risk(&self, lines: &[BudgetLine]) -> BudgetRiskAnalysis {
        self.analyze(&prompt::budget_risk(lines))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Budget analysis fell back");
                BudgetRiskAnalysis::fallback(&e)
            })
    }

    /// Schedule delay assessment; never fails.
    pub async fn analyze_schedule_risk(&self, days: &[ScheduleDay]) -> ScheduleRiskAnalysis {
        self.analyze(&prompt::schedule_risk(days))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Schedule analysis fell back");
                ScheduleRiskAnalysis::fallback(&e)
            })
    }

    /// Whole-project assessment; never fails.
    pub async fn analyze_project_overall(
        &self,
        title: &str,
        lines: &[BudgetLine],
        days: &[ScheduleDay],
    ) -> ProjectAnalysis {
        self.analyze(&prompt::project_overall(title, lines, days))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Project analysis fell back");
                ProjectAnalysis::fallback(&e)
            })
    }

    /// Answers a free-form question; failures come back as the answer text.
    pub async fn ask_question(&self, question: &str, context: &Value) -> String {
        match self.generate(&prompt::question(question, context)).await {
            Ok(answer) => answer,
            Err(NarrativeError::NotConfigured) => not_configured_message(),
            Err(e) => {
                warn!(error = %e, "Question answering failed");
                format!("Error: {e}")
            }
        }
    }

    /// Writes an executive status report; failures come back as the report text.
    pub async fn generate_report(&self, project_data: &Value) -> String {
        match self.generate(&prompt::executive_report(project_data)).await {
            Ok(report) => report,
            Err(NarrativeError::NotConfigured) => not_configured_message(),
            Err(e) => {
                warn!(error = %e, "Report generation failed");
                format!("Error generating report: {e}")
            }
        }
    }

    /// Probes the model with a trivial prompt.
    pub async fn health(&self) -> NarrativeHealth {
        let Some(generator) = self.generator.as_ref() else {
            return NarrativeHealth::Error {
                message: NarrativeError::NotConfigured.to_string(),
            };
        };
        match generator.generate(prompt::HEALTH_PROBE).await {
            Ok(_) => NarrativeHealth::Connected {
                ai_provider: PROVIDER.to_string(),
                model: generator.model().to_string(),
                message: "AI is operational".to_string(),
            },
            Err(e) => NarrativeHealth::Error {
                message: e.to_string(),
            },
        }
    }
}

fn not_configured_message() -> String {
    "Gemini AI not configured. Please add GEMINI_API_KEY to .env file.".to_string()
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
