//! Process-local preference store

use async_trait::async_trait;
use dashmap::DashMap;

use super::PrefsStore;
use crate::error::PrefsError;

/// Preferences kept in memory and lost when the process exits.
///
/// # Example
///
/// ```
/// use beantable_lib::prefs::{MemoryStore, TablePrefs};
///
/// let prefs = TablePrefs::new(MemoryStore::new(), "servers");
/// assert_eq!(prefs.node(), "servers");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: DashMap<(String, String), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs across all nodes.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

fn key(node: &str, name: &str) -> (String, String) {
    (node.to_string(), name.to_string())
}

#[async_trait]
impl PrefsStore for MemoryStore {
    async fn load(&self, node: &str, name: &str) -> Result<Option<Vec<u8>>, PrefsError> {
        Ok(self.blobs.get(&key(node, name)).map(|b| b.value().clone()))
    }

    async fn store(&self, node: &str, name: &str, blob: Vec<u8>) -> Result<(), PrefsError> {
        self.blobs.insert(key(node, name), blob);
        Ok(())
    }

    async fn names(&self, node: &str) -> Result<Vec<String>, PrefsError> {
        let mut names: Vec<String> = self
            .blobs
            .iter()
            .filter(|e| e.key().0 == node)
            .map(|e| e.key().1.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn remove_node(&self, node: &str) -> Result<usize, PrefsError> {
        let before = self.blobs.len();
        self.blobs.retain(|(n, _), _| n != node);
        Ok(before - self.blobs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nodes_are_separate() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.store("a", "x", vec![1]).await.unwrap();
        store.store("a", "y", vec![2]).await.unwrap();
        store.store("ab", "x", vec![3]).await.unwrap();

        assert_eq!(store.names("a").await.unwrap(), ["x", "y"]);
        assert_eq!(store.load("ab", "x").await.unwrap(), Some(vec![3]));

        assert_eq!(store.remove_node("a").await.unwrap(), 2);
        assert_eq!(store.load("a", "x").await.unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
