//! Inferred-schema data model: field types, cardinality modes, and the
//! ordered field mappings produced by inference.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column data type of an inferred field. Closed set; `Record` marks a
/// nested structure with its own sub-fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    Record,
    Date,
    Datetime,
    Time,
    Timestamp,
}

/// Cardinality of an inferred field.
///
/// `Required` is part of the column model but is never produced by
/// inference; no sampled value maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldMode {
    Nullable,
    Repeated,
    Required,
}

/// Ordered mapping from field name to its inferred schema.
///
/// Insertion order is first-encounter order; inserting an existing name
/// overwrites the value but keeps the original position, which gives the
/// last-write-wins fold across multiple sample records.
pub type SchemaMapping = IndexMap<String, FieldSchema>;

/// One inferred column descriptor.
///
/// `fields` is present exactly when `field_type` is [`FieldType::Record`],
/// even for an empty nested map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub mode: FieldMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<SchemaMapping>,
}

impl FieldSchema {
    /// Nullable scalar field with no nested members.
    pub(crate) fn scalar(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            mode: FieldMode::Nullable,
            fields: None,
        }
    }

    /// Record field with the given nested members.
    pub(crate) fn record(name: &str, mode: FieldMode, fields: SchemaMapping) -> Self {
        Self {
            name: name.to_string(),
            field_type: FieldType::Record,
            mode,
            fields: Some(fields),
        }
    }
}

/// Schema in the form a table-registration API consumes: an ordered list
/// of fields, with nested members also flattened to lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub fields: Vec<TableField>,
}

/// List-form counterpart of [`FieldSchema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub mode: FieldMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TableField>>,
}

impl TableSchema {
    /// Project a name-keyed mapping into the ordered list form, in the
    /// mapping's iteration order.
    pub fn from_mapping(mapping: &SchemaMapping) -> Self {
        Self {
            fields: mapping.values().map(TableField::from).collect(),
        }
    }
}

impl From<&FieldSchema> for TableField {
    fn from(schema: &FieldSchema) -> Self {
        Self {
            name: schema.name.clone(),
            field_type: schema.field_type,
            mode: schema.mode,
            fields: schema
                .fields
                .as_ref()
                .map(|nested| nested.values().map(TableField::from).collect()),
        }
    }
}
