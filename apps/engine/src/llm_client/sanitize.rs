//! Best-effort removal of markdown code fences around model output.
//!
//! Models routinely wrap structured output in ```json fences despite explicit
//! instructions not to. This strips that wrapping and nothing else: it never
//! attempts to repair the payload itself.

/// Strips code-fence markers when the (trimmed) text starts with one,
/// otherwise returns the text trimmed and unchanged. Idempotent.
pub fn sanitize(raw: &str) -> String {
    let text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped.replace("```", "").trim().to_string()
    } else if text.starts_with("```") {
        text.replace("```", "").trim().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_tagged_fence() {
        assert_eq!(sanitize("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strips_untagged_fence() {
        assert_eq!(sanitize("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_no_op_without_fences() {
        assert_eq!(sanitize("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_unclosed_fence_still_stripped() {
        assert_eq!(sanitize("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_interior_text_not_repaired() {
        // Malformed payloads pass through untouched for the validator to
        // classify.
        assert_eq!(sanitize("```json\nnot json\n```"), "not json");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "```json\n{\"a\":1}\n```",
            "```\n[1, 2]\n```",
            "{\"a\":1}",
            "  plain text  ",
            "",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "sanitize not idempotent for {input:?}");
        }
    }
}
