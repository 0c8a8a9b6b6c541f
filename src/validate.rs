//! Turning a candidate substring into a validated, typed value.
//!
//! The pipeline is strict decode → shape walk → typed decode, each stage
//! failing with a typed error. The decoder accepts standard JSON only: no
//! trailing commas, no comments. Validation is read-only; re-running the
//! pipeline on the same payload yields identical results.

use crate::error::ExtractionError;
use crate::extract::{self, Candidate};
use crate::schema::Schema;
use crate::types::StructuredOutput;
use serde_json::Value;

/// Strictly decode a candidate into an untyped JSON tree.
///
/// On a syntax error the reported position is a byte offset into the raw
/// payload the candidate came from, so diagnostics point at the model output
/// itself rather than the excised substring.
pub fn decode(candidate: &Candidate<'_>) -> Result<Value, ExtractionError> {
    serde_json::from_str(candidate.text()).map_err(|err| ExtractionError::MalformedJson {
        position: candidate.start() + byte_offset(candidate.text(), err.line(), err.column()),
        message: err.to_string(),
    })
}

/// Translate serde_json's 1-based line/column into a byte offset in `text`.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

/// Run extraction, strict decode, and the shape walk against an explicit
/// schema, returning the untyped tree.
pub fn value_from_text(raw: &str, schema: &Schema) -> Result<Value, ExtractionError> {
    let candidate = extract::extract_candidate(raw)?;
    let value = decode(&candidate)?;
    schema.validate(&value)?;
    Ok(value)
}

/// Run the full pipeline into a typed record.
///
/// A decode failure after a passing shape walk means the record type is
/// stricter than its schema, i.e. a broken [`StructuredOutput`] contract. It
/// surfaces as `MalformedJson` carrying serde's message rather than a panic.
pub fn structured<T: StructuredOutput>(raw: &str) -> Result<T, ExtractionError> {
    let candidate = extract::extract_candidate(raw)?;
    let value = decode(&candidate)?;
    T::SCHEMA.validate(&value)?;
    serde_json::from_value(value).map_err(|err| ExtractionError::MalformedJson {
        position: candidate.start(),
        message: format!("value passed the {} shape but failed decode: {err}", T::SCHEMA.name),
    })
}
