//! Per-table preferences
//!
//! Every table persists under its own node: the column layout as the
//! `propertyCol` blob and, when asked to, a snapshot of its records as the
//! `beanList` blob. Blobs are bincode-encoded by [`TablePrefs`]; a
//! [`PrefsStore`] only keeps bytes.

mod memory;
mod sqlite;
mod store;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::PrefsStore;

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PrefsError;
use crate::layout::LayoutSnapshot;

/// Blob holding the column layout.
pub const LAYOUT_BLOB: &str = "propertyCol";

/// Blob holding the record snapshot.
pub const RECORDS_BLOB: &str = "beanList";

/// One table's node in a [`PrefsStore`].
///
/// Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct TablePrefs {
    store: Arc<dyn PrefsStore>,
    node: String,
}

impl TablePrefs {
    pub fn new(store: impl PrefsStore + 'static, node: impl Into<String>) -> Self {
        Self::shared(Arc::new(store), node)
    }

    /// A node in a store other tables also use.
    pub fn shared(store: Arc<dyn PrefsStore>, node: impl Into<String>) -> Self {
        Self {
            store,
            node: node.into(),
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, PrefsError> {
        let Some(blob) = self.store.load(&self.node, name).await? else {
            return Ok(None);
        };
        bincode::deserialize(&blob)
            .map(Some)
            .map_err(|source| PrefsError::Decode {
                node: self.node.clone(),
                name: name.to_string(),
                source,
            })
    }

    async fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<(), PrefsError> {
        let blob = bincode::serialize(value).map_err(|source| PrefsError::Encode {
            node: self.node.clone(),
            name: name.to_string(),
            source,
        })?;
        self.store.store(&self.node, name, blob).await
    }

    /// Loads the saved layout, or an empty one if none was saved.
    pub async fn load_layout(&self) -> Result<LayoutSnapshot, PrefsError> {
        Ok(self.load(LAYOUT_BLOB).await?.unwrap_or_default())
    }

    pub async fn save_layout(&self, layout: &LayoutSnapshot) -> Result<(), PrefsError> {
        self.save(LAYOUT_BLOB, layout).await
    }

    /// Loads the saved records, or `None` if none were saved.
    pub async fn load_records<R>(&self) -> Result<Option<Vec<R>>, PrefsError>
    where
        R: DeserializeOwned,
    {
        self.load(RECORDS_BLOB).await
    }

    pub async fn save_records<R>(&self, records: &[R]) -> Result<(), PrefsError>
    where
        R: Serialize + Sync,
    {
        self.save(RECORDS_BLOB, records).await
    }

    /// Names of the blobs saved for this node.
    pub async fn saved(&self) -> Result<Vec<String>, PrefsError> {
        self.store.names(&self.node).await
    }

    /// Forgets everything saved for this node.
    pub async fn clear(&self) -> Result<(), PrefsError> {
        let removed = self.store.remove_node(&self.node).await?;
        debug!("cleared {removed} preference blobs of '{}'", self.node);
        Ok(())
    }
}

impl fmt::Debug for TablePrefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TablePrefs")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}
