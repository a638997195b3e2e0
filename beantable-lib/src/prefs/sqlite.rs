//! SQLite preference store

use std::path::Path;

use async_sqlite::Client;
use async_sqlite::ClientBuilder;
use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use rusqlite::OptionalExtension;

use super::PrefsStore;
use crate::error::PrefsError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS table_prefs (
    node TEXT NOT NULL,
    name TEXT NOT NULL,
    blob BLOB NOT NULL,
    PRIMARY KEY (node, name)
)";

/// Table preferences in one SQLite file, one row per `(node, name)` blob.
///
/// Blobs read or written once are cached, so restoring a table on every
/// start only hits the database the first time.
pub struct SqliteStore {
    client: Client,
    cache: DashMap<(String, String), Vec<u8>>,
}

impl SqliteStore {
    /// Opens the database at `path`, creating it and its table if needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let path = path.as_ref();
        let client = ClientBuilder::new().path(path).open().await?;
        client.conn(|conn| conn.execute(SCHEMA, [])).await?;
        debug!("table preferences at {}", path.display());

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }

    /// Every node with at least one stored blob, sorted.
    pub async fn nodes(&self) -> Result<Vec<String>, PrefsError> {
        let nodes = self
            .client
            .conn(|conn| {
                let mut stmt = conn.prepare("SELECT DISTINCT node FROM table_prefs ORDER BY node")?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect::<Result<Vec<String>, _>>()
            })
            .await?;
        Ok(nodes)
    }
}

#[async_trait]
impl PrefsStore for SqliteStore {
    async fn load(&self, node: &str, name: &str) -> Result<Option<Vec<u8>>, PrefsError> {
        let key = (node.to_string(), name.to_string());
        if let Some(blob) = self.cache.get(&key) {
            return Ok(Some(blob.clone()));
        }

        let (n, b) = key.clone();
        let blob = self
            .client
            .conn(move |conn| {
                conn.query_row(
                    "SELECT blob FROM table_prefs WHERE node = ?1 AND name = ?2",
                    [&n, &b],
                    |row| row.get::<_, Vec<u8>>(0),
                )
                .optional()
            })
            .await?;

        if let Some(blob) = &blob {
            self.cache.insert(key, blob.clone());
        }
        Ok(blob)
    }

    async fn store(&self, node: &str, name: &str, blob: Vec<u8>) -> Result<(), PrefsError> {
        let (n, b, bytes) = (node.to_string(), name.to_string(), blob.clone());
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO table_prefs (node, name, blob) VALUES (?1, ?2, ?3)
                     ON CONFLICT(node, name) DO UPDATE SET blob = excluded.blob",
                    rusqlite::params![n, b, bytes],
                )
            })
            .await?;

        self.cache.insert((node.to_string(), name.to_string()), blob);
        Ok(())
    }

    async fn names(&self, node: &str) -> Result<Vec<String>, PrefsError> {
        let n = node.to_string();
        let names = self
            .client
            .conn(move |conn| {
                let mut stmt =
                    conn.prepare("SELECT name FROM table_prefs WHERE node = ?1 ORDER BY name")?;
                let rows = stmt.query_map([&n], |row| row.get(0))?;
                rows.collect::<Result<Vec<String>, _>>()
            })
            .await?;
        Ok(names)
    }

    async fn remove_node(&self, node: &str) -> Result<usize, PrefsError> {
        let n = node.to_string();
        let removed = self
            .client
            .conn(move |conn| conn.execute("DELETE FROM table_prefs WHERE node = ?1", [&n]))
            .await?;

        self.cache.retain(|(owner, _), _| owner != node);
        Ok(removed)
    }
}
