//! Typed records for the two agent reply shapes.
//!
//! These mirror the shapes the fortune and summary agents advertise. Numeric
//! fields are `f64` throughout: the schema kind is "number" and the producer
//! is a JavaScript client, so any JSON number that passes the shape walk must
//! also pass the typed decode. Unknown fields are ignored on decode, matching
//! the minimum-shape contract.

use crate::schema::{FORTUNE, SUMMARY, Schema};
use serde::{Deserialize, Serialize};

/// Binds a deserializable record to the minimum-shape contract its producer
/// advertises, so the pipeline can validate before decoding.
///
/// Implementors must keep the schema at least as strict as the struct: a
/// value that passes `SCHEMA` must deserialize into `Self`.
pub trait StructuredOutput: serde::de::DeserializeOwned {
    /// The minimum shape checked before the typed decode.
    const SCHEMA: &'static Schema;
}

/// A full fortune reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneData {
    pub result: FortuneResult,
    pub confidence: f64,
    pub metadata: FortuneMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneResult {
    pub fortune: String,
    pub tone: String,
    pub length: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneMetadata {
    pub processing_time: String,
    pub fortune_type: String,
}

impl StructuredOutput for FortuneData {
    const SCHEMA: &'static Schema = &FORTUNE;
}

/// A shareable-summary reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub result: SummaryResult,
    pub confidence: f64,
    pub metadata: SummaryMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub original_length: f64,
    pub summary_length: f64,
    pub share_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub processing_time: String,
    pub compression_ratio: f64,
}

impl StructuredOutput for SummaryData {
    const SCHEMA: &'static Schema = &SUMMARY;
}
