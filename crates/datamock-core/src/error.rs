use thiserror::Error;

/// Schema-level errors raised before any record is produced.
///
/// Every variant is a user-input error: the message names the offending
/// field and the reason, and generation aborts with no partial output.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The decoded schema document contains no fields.
    #[error("schema contains no fields")]
    EmptySchema,
    /// A field's constraints fail type-specific validation.
    #[error("invalid field '{field}': {reason}")]
    InvalidFieldSpec { field: String, reason: String },
    /// Fewer qualifying loop fields than expansion dimensions.
    #[error("schema declares {found} loop field(s), exactly three are required")]
    InsufficientLoopFields { found: usize },
    /// The decoded value is not a JSON object of field definitions.
    #[error("invalid schema document: {0}")]
    InvalidDocument(String),
}

impl SchemaError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidFieldSpec {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results returned by datamock crates.
pub type Result<T> = std::result::Result<T, SchemaError>;
