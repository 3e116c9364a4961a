//! Narrative analysis for Cinetrack.
//!
//! Wraps a generative-language endpoint, treated as `prompt -> text`, behind
//! the [`NarrativeGenerator`] trait. [`NarrativeService`] builds prompts from
//! budget and schedule rows, parses the model's JSON replies, and degrades to
//! fixed fallback payloads whenever the model is unavailable or misbehaves.

pub mod analysis;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod reply;
pub mod service;

pub use analysis::{
    BudgetForecast, BudgetRiskAnalysis, ProjectAnalysis, ScheduleForecast, ScheduleRiskAnalysis,
};
pub use error::NarrativeError;
pub use gemini::GeminiClient;
pub use generator::NarrativeGenerator;
pub use service::{NarrativeHealth, NarrativeService};
