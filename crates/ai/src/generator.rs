//! Text generation seam.

use async_trait::async_trait;

use crate::error::NarrativeError;

/// Anything that turns a prompt into text.
///
/// Implemented by [`crate::GeminiClient`]; tests substitute canned replies.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generates a reply for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;

    /// Model identifier, reported by health checks.
    fn model(&self) -> &str;
}
