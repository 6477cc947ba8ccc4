pub mod classify;
pub mod error;
pub mod infer;
pub mod schema;
pub mod value;

// Re-export commonly used items
pub use error::{Result, SchemaError};
pub use infer::{
    infer_schema, infer_schema_with_config, infer_table_schema, infer_table_schema_with_config,
    InferenceConfig,
};
pub use schema::{FieldMode, FieldSchema, FieldType, SchemaMapping, TableField, TableSchema};

use serde_json::Value;

/// Helper function to infer one combined schema from a collection of
/// serialized records.
pub fn infer_from_records(
    records: &[String],
    config: Option<InferenceConfig>,
) -> Result<SchemaMapping> {
    let data = Value::Array(records.iter().map(|text| Value::String(text.clone())).collect());
    infer_schema_with_config(&data, &config.unwrap_or_default())
}

/// Create a default inference configuration
pub fn default_config() -> InferenceConfig {
    InferenceConfig::default()
}
