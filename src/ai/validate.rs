use serde_json::Value;

use super::gemini::{GenerationOptions, LlmClient};
use super::prompt::{build_doc_check_prompt, DOC_CHECK_SYSTEM_PROMPT};
use crate::models::{DocumentKind, SemanticVerdict};

/// Reason recorded when the model's output was not valid JSON.
pub const REASON_PARSE_FAILURE: &str = "Gagal parsing respons model";

/// Reason recorded when the JSON parsed but did not have the verdict
/// shape (not an object, or no boolean `is_valid`). Kept distinct from
/// the parse failure for observability.
pub const REASON_SHAPE_FAILURE: &str = "Format model tidak sesuai";

const DOC_CHECK_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.0,
    max_output_tokens: 300,
};

/// Judge whether extracted text genuinely matches the declared kind.
///
/// This is the authoritative second tier of validation (the sanity check
/// is advisory). Never fails: transport, parse and shape problems all
/// collapse into a deterministic rejected verdict whose reason says
/// which of the three went wrong.
pub fn validate_document(
    llm: &dyn LlmClient,
    kind: DocumentKind,
    text: &str,
    filename: &str,
) -> SemanticVerdict {
    let prompt = build_doc_check_prompt(kind, text, filename);
    let raw = match llm.generate(&prompt, DOC_CHECK_SYSTEM_PROMPT, &DOC_CHECK_OPTIONS) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(kind = kind.as_str(), error = %e, "Semantic check call failed");
            return SemanticVerdict::rejected(&format!("Gagal memanggil model: {e}"));
        }
    };
    parse_verdict(&raw)
}

/// Parse the model's JSON verdict into the strict schema.
///
/// Defaulting rules: missing `reason` becomes an empty string, missing
/// `confidence` becomes 0.0, out-of-range confidence is clamped into
/// [0, 1].
pub(crate) fn parse_verdict(raw: &str) -> SemanticVerdict {
    let value: Value = match serde_json::from_str(strip_code_fences(raw)) {
        Ok(value) => value,
        Err(_) => return SemanticVerdict::rejected(REASON_PARSE_FAILURE),
    };
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => return SemanticVerdict::rejected(REASON_SHAPE_FAILURE),
    };
    let is_valid = match obj.get("is_valid").and_then(Value::as_bool) {
        Some(is_valid) => is_valid,
        None => return SemanticVerdict::rejected(REASON_SHAPE_FAILURE),
    };
    let reason = obj
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let confidence = obj
        .get("confidence")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0) as f32;

    SemanticVerdict {
        is_valid,
        reason,
        confidence,
    }
}

/// Strip a ```json fence if the model wrapped its output in one.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        if let Some(end) = rest.find("```") {
            return rest[..end].trim();
        }
    }
    trimmed
}
