use thiserror::Error;

/// Errors raised while inferring a schema from sample records.
///
/// Both variants are terminal for the current inference call: no partial
/// schema is returned and no retry is attempted.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A value's runtime shape has no defined mapping to a column type.
    #[error("schema not defined: {0}")]
    NotDefined(String),

    /// A serialized record could not be parsed into a keyed map.
    /// Propagated unchanged from the deserializer.
    #[error("invalid record input: {0}")]
    Deserialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
