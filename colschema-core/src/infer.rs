//! The recursive inference walk: resolve one value, collect a keyed map,
//! and fold one or many sample records into a single schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classify::classify_text;
use crate::error::{Result, SchemaError};
use crate::schema::{FieldMode, FieldSchema, FieldType, SchemaMapping, TableSchema};
use crate::value::{shape_name, Shape};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Enable debug output. When `true`, prints each field classification
    /// and record fold to stderr as inference runs.
    pub debug: bool,
}

impl InferenceConfig {
    pub fn debug(&self, args: std::fmt::Arguments) {
        if self.debug {
            eprintln!("{}", args);
        }
    }
}

#[macro_export]
macro_rules! debug {
    ($cfg:expr, $($arg:tt)*) => {
        $cfg.debug(format_args!($($arg)*))
    };
}

/// Resolve one named value into a field schema, dispatching on its shape.
///
/// Scalars come out nullable; a keyed map becomes a nullable `RECORD`
/// with its members collected recursively; a sequence resolves via
/// [`resolve_sequence`]. Any other shape fails with
/// [`SchemaError::NotDefined`].
pub fn resolve_value(name: &str, value: &Value, config: &InferenceConfig) -> Result<FieldSchema> {
    match Shape::of(value) {
        Shape::Text(text) => Ok(classify_text(name, text)),
        Shape::Integer => Ok(FieldSchema::scalar(name, FieldType::Integer)),
        Shape::Float => Ok(FieldSchema::scalar(name, FieldType::Float)),
        Shape::Boolean => Ok(FieldSchema::scalar(name, FieldType::Boolean)),
        Shape::Map(map) => Ok(FieldSchema::record(
            name,
            FieldMode::Nullable,
            collect_fields(map, config)?,
        )),
        Shape::Sequence(items) => resolve_sequence(name, items, config),
        Shape::Unsupported(kind) => Err(SchemaError::NotDefined(format!(
            "no column type for {kind} value in field {name:?}"
        ))),
    }
}

/// Determine the element schema of a repeated field.
///
/// Policy is last-element-wins: each scalar element silently overwrites
/// the type inferred so far, and a map element decisively switches the
/// field to `RECORD`/`REPEATED` with members collected from that element.
/// A sequence element fails the whole resolution; elements with no
/// element classification (null) are skipped. An empty sequence yields
/// `TEXT`/`REPEATED`.
fn resolve_sequence(name: &str, items: &[Value], config: &InferenceConfig) -> Result<FieldSchema> {
    let mut schema = FieldSchema {
        name: name.to_string(),
        field_type: FieldType::Text,
        mode: FieldMode::Repeated,
        fields: None,
    };
    for item in items {
        let mut next = match Shape::of(item) {
            Shape::Text(text) => classify_text(name, text),
            Shape::Integer => FieldSchema::scalar(name, FieldType::Integer),
            Shape::Float => FieldSchema::scalar(name, FieldType::Float),
            Shape::Boolean => FieldSchema::scalar(name, FieldType::Boolean),
            Shape::Map(map) => {
                FieldSchema::record(name, FieldMode::Repeated, collect_fields(map, config)?)
            }
            Shape::Sequence(_) => {
                return Err(SchemaError::NotDefined(format!(
                    "sequence nested in a sequence is not defined in field {name:?}"
                )))
            }
            Shape::Unsupported(_) => continue,
        };
        next.mode = FieldMode::Repeated;
        schema = next;
    }
    Ok(schema)
}

/// Collect an ordered field mapping for one keyed map, in the map's own
/// key order. One unsupported value anywhere fails the whole collection.
pub fn collect_fields(map: &Map<String, Value>, config: &InferenceConfig) -> Result<SchemaMapping> {
    let mut fields = SchemaMapping::new();
    for (key, value) in map {
        let schema = resolve_value(key, value, config)?;
        crate::debug!(
            config,
            "field {key:?} -> {:?}/{:?}",
            schema.field_type,
            schema.mode
        );
        fields.insert(key.clone(), schema);
    }
    Ok(fields)
}

/// Infer one combined schema mapping from a single record or a sequence
/// of records.
///
/// A record given as a text scalar is deserialized first; deserializer
/// errors propagate unchanged. Records fold last-write-wins per field
/// name, with insertion order following the first encounter of each name
/// across the whole input.
pub fn infer_schema_with_config(data: &Value, config: &InferenceConfig) -> Result<SchemaMapping> {
    let records = match data {
        Value::Array(items) => items.as_slice(),
        single => std::slice::from_ref(single),
    };

    let mut schema = SchemaMapping::new();
    for record in records {
        let collected = match record {
            Value::String(text) => {
                let parsed: Value = serde_json::from_str(text)?;
                collect_record(&parsed, config)?
            }
            keyed => collect_record(keyed, config)?,
        };
        crate::debug!(config, "folding record with {} field(s)", collected.len());
        for (name, field) in collected {
            // IndexMap keeps the first-seen position on overwrite.
            schema.insert(name, field);
        }
    }
    Ok(schema)
}

fn collect_record(record: &Value, config: &InferenceConfig) -> Result<SchemaMapping> {
    match record {
        Value::Object(map) => collect_fields(map, config),
        other => Err(SchemaError::NotDefined(format!(
            "record must be a keyed map, got {}",
            shape_name(other)
        ))),
    }
}

/// [`infer_schema_with_config`] with the default configuration.
pub fn infer_schema(data: &Value) -> Result<SchemaMapping> {
    infer_schema_with_config(data, &InferenceConfig::default())
}

/// Infer a schema and project it into the ordered field-list form a
/// table-registration API consumes.
pub fn infer_table_schema_with_config(
    data: &Value,
    config: &InferenceConfig,
) -> Result<TableSchema> {
    let mapping = infer_schema_with_config(data, config)?;
    Ok(TableSchema::from_mapping(&mapping))
}

/// [`infer_table_schema_with_config`] with the default configuration.
pub fn infer_table_schema(data: &Value) -> Result<TableSchema> {
    infer_table_schema_with_config(data, &InferenceConfig::default())
}
