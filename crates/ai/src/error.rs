//! Narrative service error types.

use thiserror::Error;

/// Errors raised while asking the model for text.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// No API key was configured.
    #[error("Gemini AI not configured")]
    NotConfigured,

    /// Transport failure before a response arrived.
    #[error("Request failed: {0}")]
    Request(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// The endpoint answered with a non-success status.
    #[error("Gemini API error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response carried no text.
    #[error("Empty response from model")]
    EmptyResponse,

    /// The text was not the JSON object the prompt asked for.
    #[error("Malformed model reply: {0}")]
    MalformedReply(String),
}
