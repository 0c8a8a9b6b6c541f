//! Minimum-shape contracts for agent replies.
//!
//! A [`Schema`] declares the fields a decoded reply must carry and the JSON
//! kind of each, nothing more: extra fields are ignored, so a schema is a
//! floor, not an exact mold. The two shapes this crate ships ([`FORTUNE`]
//! and [`SUMMARY`]) are process-wide constants; callers pass the one they
//! expect explicitly instead of relying on ambient context.
//!
//! Validation is a read-only walk over the value tree. It never mutates the
//! input and reports the first violation with its dotted path.

use crate::error::ShapeMismatch;
use serde_json::{Map, Value};
use std::fmt;

/// The primitive kind of a JSON value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a decoded value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(name)
    }
}

/// What kind of value a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Number,
    String,
    Array,
    /// A nested object with its own minimum shape.
    Object(&'static [FieldSpec]),
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Bool, Value::Bool(_))
                | (Self::Number, Value::Number(_))
                | (Self::String, Value::String(_))
                | (Self::Array, Value::Array(_))
                | (Self::Object(_), Value::Object(_))
        )
    }

    fn expected(self) -> JsonKind {
        match self {
            Self::Bool => JsonKind::Bool,
            Self::Number => JsonKind::Number,
            Self::String => JsonKind::String,
            Self::Array => JsonKind::Array,
            Self::Object(_) => JsonKind::Object,
        }
    }
}

/// One field of a schema: name, kind, and whether absence is an error.
///
/// Optional fields that are absent simply stay absent; supplying defaults for
/// them is the caller's policy, not this layer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A named minimum-shape contract for one reply kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Check `value` against this schema.
    ///
    /// The walk is read-only and side-effect-free. The top level must be an
    /// object; each declared field must be present (if required) with the
    /// declared kind; unknown fields are ignored.
    pub fn validate(&self, value: &Value) -> Result<(), ShapeMismatch> {
        let Value::Object(map) = value else {
            return Err(ShapeMismatch::NotAnObject {
                actual: JsonKind::of(value),
            });
        };
        check_fields(self.fields, map, "")
    }
}

fn check_fields(
    fields: &'static [FieldSpec],
    map: &Map<String, Value>,
    prefix: &str,
) -> Result<(), ShapeMismatch> {
    for spec in fields {
        let Some(found) = map.get(spec.name) else {
            if spec.required {
                return Err(ShapeMismatch::MissingField {
                    path: join(prefix, spec.name),
                });
            }
            continue;
        };
        if !spec.kind.matches(found) {
            return Err(ShapeMismatch::WrongType {
                path: join(prefix, spec.name),
                expected: spec.kind.expected(),
                actual: JsonKind::of(found),
            });
        }
        if let (FieldKind::Object(nested), Value::Object(inner)) = (spec.kind, found) {
            check_fields(nested, inner, &join(prefix, spec.name))?;
        }
    }
    Ok(())
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Shape of a fortune reply.
pub const FORTUNE: Schema = Schema {
    name: "fortune",
    fields: &[
        FieldSpec::required(
            "result",
            FieldKind::Object(&[
                FieldSpec::required("fortune", FieldKind::String),
                FieldSpec::required("tone", FieldKind::String),
                FieldSpec::required("length", FieldKind::Number),
                FieldSpec::required("timestamp", FieldKind::String),
            ]),
        ),
        FieldSpec::required("confidence", FieldKind::Number),
        FieldSpec::required(
            "metadata",
            FieldKind::Object(&[
                FieldSpec::required("processing_time", FieldKind::String),
                FieldSpec::required("fortune_type", FieldKind::String),
            ]),
        ),
    ],
};

/// Shape of a shareable-summary reply.
pub const SUMMARY: Schema = Schema {
    name: "summary",
    fields: &[
        FieldSpec::required(
            "result",
            FieldKind::Object(&[
                FieldSpec::required("summary", FieldKind::String),
                FieldSpec::required("original_length", FieldKind::Number),
                FieldSpec::required("summary_length", FieldKind::Number),
                FieldSpec::required("share_format", FieldKind::String),
            ]),
        ),
        FieldSpec::required("confidence", FieldKind::Number),
        FieldSpec::required(
            "metadata",
            FieldKind::Object(&[
                FieldSpec::required("processing_time", FieldKind::String),
                FieldSpec::required("compression_ratio", FieldKind::Number),
            ]),
        ),
    ],
};
