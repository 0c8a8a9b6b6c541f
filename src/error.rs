//! Error types for uncork.
//!
//! Every failure in this crate is returned as a value; nothing panics on
//! untrusted input. The taxonomy mirrors the two stages of the pipeline:
//! locating/decoding a JSON value (`ExtractionError`) and checking its shape
//! against a schema (`ShapeMismatch`).

use crate::schema::JsonKind;
use thiserror::Error;

/// Failures on the way from raw model text to a validated value.
///
/// All variants are recoverable. The caller decides what to substitute for
/// the user; see [`crate::fallback::FallbackPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// No opening brace or bracket anywhere in the scanned text.
    #[error("no JSON value found in model output")]
    NoJsonFound,

    /// A value opened but its nesting never closed before the input ended,
    /// typically truncated model output. Also reported when the scan abandons
    /// a value for exceeding the nesting ceiling, in which case `depth` holds
    /// the depth that tripped the limit.
    #[error("JSON value opened at byte {opened_at} never closes (depth {depth} when the scan stopped)")]
    UnterminatedValue { opened_at: usize, depth: usize },

    /// The candidate substring is not valid JSON under the strict grammar.
    /// `position` is a byte offset into the raw payload, not the candidate.
    #[error("malformed JSON at byte {position}: {message}")]
    MalformedJson { position: usize, message: String },

    /// The candidate parsed, but the value does not conform to the schema.
    #[error(transparent)]
    Shape(#[from] ShapeMismatch),
}

/// Validation failures: JSON parsed successfully but does not meet the
/// minimum shape the schema demands.
///
/// Field diagnostics carry the dotted path from the object root, e.g.
/// `result.fortune`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    /// The decoded value is an array or scalar, not an object.
    #[error("expected a JSON object at the top level, got {actual}")]
    NotAnObject { actual: JsonKind },

    /// A required field is absent.
    #[error("required field `{path}` is missing")]
    MissingField { path: String },

    /// A field is present but holds the wrong primitive kind.
    #[error("field `{path}` is {actual}, expected {expected}")]
    WrongType {
        path: String,
        expected: JsonKind,
        actual: JsonKind,
    },
}
