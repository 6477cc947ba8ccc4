//! Shape dispatch over untyped input values.
//!
//! All "what shape is this value" logic lives in the one conversion here,
//! so the inference code downstream matches exhaustively over a closed
//! variant set instead of re-probing `serde_json::Value`.

use serde_json::{Map, Value};

/// Runtime shape of one input value.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Text(&'a str),
    Integer,
    Float,
    Boolean,
    Map(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    /// A shape with no column-type mapping, tagged with a short
    /// description for error detail.
    Unsupported(&'static str),
}

impl<'a> Shape<'a> {
    pub fn of(value: &'a Value) -> Shape<'a> {
        match value {
            Value::String(text) => Shape::Text(text),
            // Booleans are their own variant here, so they can never be
            // classified as integers.
            Value::Bool(_) => Shape::Boolean,
            Value::Number(number) if number.is_i64() || number.is_u64() => Shape::Integer,
            Value::Number(_) => Shape::Float,
            Value::Object(map) => Shape::Map(map),
            Value::Array(items) => Shape::Sequence(items),
            Value::Null => Shape::Unsupported("null"),
        }
    }
}

/// Short shape name for error messages.
pub(crate) fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}
