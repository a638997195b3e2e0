//! Column lookup error types

/// Errors from column model operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// No live column carries this field name.
    #[error("no column named '{name}'")]
    NotFound { name: String },

    /// The column exists but is hidden, so it has no view position.
    #[error("column '{name}' is hidden")]
    Hidden { name: String },
}

impl ColumnError {
    /// Creates a new not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a new hidden-column error.
    pub fn hidden(name: impl Into<String>) -> Self {
        Self::Hidden { name: name.into() }
    }

    /// Returns `true` if the column does not exist at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
