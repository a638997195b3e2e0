//! FieldError for record accessors and mutators

/// Error returned by a record's own field accessor or mutator.
///
/// Record types produce these from the closures they register in
/// [`FieldAccess`](crate::model::FieldAccess). The binding wraps them into a
/// [`CellError`](super::CellError) carrying the field name and row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The value handed to a mutator has a different type than the field.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The accessor or mutator failed for a record-specific reason.
    #[error("{message}")]
    Failed { message: String },

    /// The field has no mutator.
    #[error("field is read-only")]
    ReadOnly,
}

impl FieldError {
    /// Creates a new type mismatch error.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Creates a new failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}
