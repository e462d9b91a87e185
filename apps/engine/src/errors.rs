use thiserror::Error;

/// Longest slice of model output carried inside a `MalformedJson` error.
/// Keeps diagnostics useful without leaking unbounded completions into logs.
const EXCERPT_MAX_CHARS: usize = 500;

/// Failure taxonomy for the generation pipeline.
///
/// `Configuration`, `Transport`, `Api` and `EmptyResponse` originate in the
/// completion client; `MalformedJson` and `SchemaViolation` in the plan
/// validator. Prompt building, sanitization and chat-context assembly are
/// pure transforms and never fail. Nothing in this core retries: every error
/// propagates unchanged to the orchestrating flow, which decides per flow
/// whether to surface it or degrade to a fallback reply.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no completion API credential is configured")]
    Configuration,

    #[error("completion transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion returned empty content")]
    EmptyResponse,

    #[error("completion was not valid JSON: {message}")]
    MalformedJson { excerpt: String, message: String },

    #[error("plan schema violation at {path}: {rule}")]
    SchemaViolation { path: String, rule: String },
}

impl GenerationError {
    /// Builds a `MalformedJson` error carrying a bounded excerpt of the
    /// offending text alongside the parser's own message.
    pub fn malformed_json(raw: &str, parser: &serde_json::Error) -> Self {
        GenerationError::MalformedJson {
            excerpt: raw.chars().take(EXCERPT_MAX_CHARS).collect(),
            message: parser.to_string(),
        }
    }

    pub fn violation(path: impl Into<String>, rule: impl Into<String>) -> Self {
        GenerationError::SchemaViolation {
            path: path.into(),
            rule: rule.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json_excerpt_is_bounded() {
        let raw = "x".repeat(5000);
        let parser = serde_json::from_str::<serde_json::Value>(&raw).unwrap_err();
        match GenerationError::malformed_json(&raw, &parser) {
            GenerationError::MalformedJson { excerpt, message } => {
                assert_eq!(excerpt.chars().count(), 500);
                assert!(!message.is_empty());
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        // Multi-byte content must not panic when truncated.
        let raw = "ñ".repeat(600);
        let parser = serde_json::from_str::<serde_json::Value>(&raw).unwrap_err();
        match GenerationError::malformed_json(&raw, &parser) {
            GenerationError::MalformedJson { excerpt, .. } => {
                assert_eq!(excerpt.chars().count(), 500);
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_violation_message_names_path_and_rule() {
        let err = GenerationError::violation("phases[0].projects", "must contain exactly 3 projects");
        assert_eq!(
            err.to_string(),
            "plan schema violation at phases[0].projects: must contain exactly 3 projects"
        );
    }
}
