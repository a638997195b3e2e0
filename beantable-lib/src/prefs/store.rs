//! Storage seam for table preferences

use async_trait::async_trait;

use crate::error::PrefsError;

/// Named blobs grouped by table node.
///
/// Each table owns one node; within it, blobs are addressed by a short name
/// such as the column layout or the record snapshot. Stores only move
/// bytes, [`TablePrefs`](super::TablePrefs) does the encoding.
#[async_trait]
pub trait PrefsStore: Send + Sync {
    /// Reads one blob, `None` if it was never stored.
    async fn load(&self, node: &str, name: &str) -> Result<Option<Vec<u8>>, PrefsError>;

    /// Writes one blob, replacing the previous one.
    async fn store(&self, node: &str, name: &str, blob: Vec<u8>) -> Result<(), PrefsError>;

    /// Names of the blobs stored for a node, sorted.
    async fn names(&self, node: &str) -> Result<Vec<String>, PrefsError>;

    /// Drops every blob of a node. Returns how many were removed.
    async fn remove_node(&self, node: &str) -> Result<usize, PrefsError>;
}
