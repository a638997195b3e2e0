//! Cell read/write error types

use super::FieldError;

/// Errors raised while reading or writing a single table cell.
///
/// These never reach the view: [`TableBinding::value_at`] turns a read
/// failure into [`Value::Unavailable`] and [`TableBinding::set_value_at`]
/// logs a write failure and still notifies observers.
///
/// [`TableBinding::value_at`]: crate::binding::TableBinding::value_at
/// [`TableBinding::set_value_at`]: crate::binding::TableBinding::set_value_at
/// [`Value::Unavailable`]: crate::model::Value::Unavailable
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    /// The field accessor failed.
    #[error("accessor for '{field}' failed on row {row}: {source}")]
    AccessorInvocation {
        field: String,
        row: usize,
        #[source]
        source: FieldError,
    },

    /// The field mutator failed.
    #[error("mutator for '{field}' failed on row {row}: {source}")]
    MutatorInvocation {
        field: String,
        row: usize,
        #[source]
        source: FieldError,
    },

    /// Row index is outside the record collection.
    #[error("row {row} out of range ({len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Column index is outside the registered columns.
    #[error("column {column} out of range ({len} columns)")]
    ColumnOutOfRange { column: usize, len: usize },
}

impl CellError {
    /// Returns the field name this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::AccessorInvocation { field, .. } | Self::MutatorInvocation { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}
