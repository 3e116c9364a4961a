//! Tolerant parsing of model replies.

use serde::de::DeserializeOwned;

use crate::error::NarrativeError;

/// Strips a surrounding markdown code fence (```` ```json ```` or ```` ``` ````).
#[must_use]
pub fn strip_fences(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parses a JSON object out of a model reply.
///
/// # Errors
///
/// Returns `NarrativeError::MalformedReply` when the unfenced text is not valid JSON
/// for `T`.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, NarrativeError> {
    serde_json::from_str(strip_fences(reply)).map_err(|e| NarrativeError::MalformedReply(e.to_string()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    #[rstest]
    #[case::bare("{\"a\":1}")]
    #[case::json_fence("```json\n{\"a\":1}\n```")]
    #[case::plain_fence("```\n{\"a\":1}\n```")]
    #[case::padded("  \n```json {\"a\":1} ```  ")]
    fn test_fenced_and_bare_replies_parse(#[case] reply: &str) {
        let value: Value = parse_reply(reply).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_prose_is_malformed() {
        let err = parse_reply::<Value>("The budget looks fine.").unwrap_err();
        assert!(matches!(err, NarrativeError::MalformedReply(_)));
    }

    #[test]
    fn test_strip_fences_leaves_plain_text() {
        assert_eq!(strip_fences("  hello "), "hello");
    }
}
