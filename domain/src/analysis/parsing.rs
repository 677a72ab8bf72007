//! Lenient parsing of structured model responses.
//!
//! Tools that ask the model for JSON routinely get the payload wrapped in
//! a Markdown code fence, with or without a `json` language tag. These
//! functions are pure domain logic — no I/O, just text handling:
//!
//! - [`strip_code_fence`] removes one optional fence wrapper
//! - [`parse_structured`] strips the fence and parses the remainder as JSON
//!
//! Whether a parse failure is an error is the *tool's* decision, not the
//! parser's: each structured tool defines a typed default it falls back to
//! on `Err`, so a malformed model response degrades a single cell instead
//! of aborting the run.

/// Strip a leading Markdown code fence (and its closing fence, when
/// present) from a model response.
///
/// Handles a fence tagged `json`, an untagged fence, and an unterminated
/// fence. Text that does not start with a fence is returned unchanged
/// (minus surrounding whitespace).
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Content runs to the closing fence, or to the end when unterminated
    let body = match rest.find("```") {
        Some(end) => &rest[..end],
        None => rest,
    };

    // Drop an optional language tag on the fence line
    let body = body.strip_prefix("json").unwrap_or(body);

    body.trim()
}

/// Parse a model response as JSON after stripping an optional code fence.
///
/// Returns the raw `serde_json::Value`; the caller decides what shapes it
/// accepts and what to do on failure.
pub fn parse_structured(text: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(strip_code_fence(text))
}
