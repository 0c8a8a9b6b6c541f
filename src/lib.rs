//! uncork
//!
//! Pull a structured message out of free-form model chatter.
//!
//! A hosted agent nominally replies with a JSON record, but what actually
//! arrives is untrusted text: the object may be wrapped in prose, fenced in
//! markdown, truncated mid-value, or followed by stray commentary. This
//! crate turns that text into a validated, typed value or a typed error,
//! deterministically and synchronously, without panicking on input content.
//!
//! Two components compose, in dependency order:
//!
//! 1. [`extract`] scans the raw text and isolates the substring that is
//!    the best candidate for a single JSON value, tolerating surrounding
//!    prose and code fences.
//! 2. [`validate`] strictly decodes the candidate and checks it against a
//!    declarative [`Schema`], yielding a typed record.
//!
//! Everything is pure and single-threaded; concurrent callers need no
//! locking. Failures are values (see [`ExtractionError`]), and what to show
//! the user instead is the caller's decision, configured via
//! [`FallbackPolicy`].
//!
//! ```rust
//! use uncork::{FortuneData, validate};
//!
//! let raw = "Here you go:\n```json\n{\"result\":{\"fortune\":\"Be bold.\",\
//!            \"tone\":\"positive\",\"length\":8,\"timestamp\":\"2024-01-01T00:00:00Z\"},\
//!            \"confidence\":0.9,\"metadata\":{\"processing_time\":\"0.5s\",\
//!            \"fortune_type\":\"general\"}}\n```\nEnjoy!";
//! let data: FortuneData = validate::structured(raw)?;
//! assert_eq!(data.result.fortune, "Be bold.");
//! # Ok::<(), uncork::ExtractionError>(())
//! ```

#![deny(unsafe_code)]

pub mod envelope;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod schema;
pub mod types;
pub mod validate;

pub use error::{ExtractionError, ShapeMismatch};
pub use extract::{Candidate, DEFAULT_MAX_DEPTH, extract_candidate, extract_candidate_with_depth};
pub use fallback::FallbackPolicy;
pub use schema::{FORTUNE, FieldKind, FieldSpec, JsonKind, SUMMARY, Schema};
pub use types::{FortuneData, StructuredOutput, SummaryData};
pub use validate::{structured, value_from_text};
