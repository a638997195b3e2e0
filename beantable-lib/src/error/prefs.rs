//! PrefsError for the per-table preference store

/// Errors from loading or saving a table's preferences.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("preference database error: {0}")]
    Database(#[from] async_sqlite::Error),

    #[error("cannot encode '{name}' for node '{node}': {source}")]
    Encode {
        node: String,
        name: String,
        #[source]
        source: bincode::Error,
    },

    /// A stored blob no longer matches the type it is read as, typically
    /// after the record type changed shape.
    #[error("cannot decode '{name}' of node '{node}': {source}")]
    Decode {
        node: String,
        name: String,
        #[source]
        source: bincode::Error,
    },
}

impl PrefsError {
    /// Returns `true` if a stored blob could not be read back.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
