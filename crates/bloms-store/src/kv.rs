//! # Key/Value Storage
//!
//! Connection pool creation and key/value access for SQLite.
//!
//! ## Why a Key/Value Table?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The page persists exactly one thing: the serialized cart, under one   │
//! │  fixed key. Browsers back localStorage with SQLite; so do we.          │
//! │                                                                         │
//! │  local_storage                                                          │
//! │  ┌───────────────────┬───────────────────────────────┬──────────────┐  │
//! │  │ key               │ value                         │ updated_at   │  │
//! │  ├───────────────────┼───────────────────────────────┼──────────────┤  │
//! │  │ berryBlomsCart    │ [{"id":1,"name":"Berry...}]   │ 2024-…Z      │  │
//! │  └───────────────────┴───────────────────────────────┴──────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! The file-backed store runs in WAL (Write-Ahead Logging) mode for better
//! crash recovery and so reads never block the write that follows every
//! cart mutation.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::migrations;

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StorageConfig::new("/path/to/storage.db").max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the SQLite storage file, or `None` for an in-memory store.
    pub storage_path: Option<PathBuf>,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one writer, one concurrent reader is plenty for a page)
    pub max_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to run the migration on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl StorageConfig {
    /// Creates a configuration for a file-backed store at the given path.
    /// The file is created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StorageConfig {
            storage_path: Some(path.into()),
            max_connections: 2,
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
        }
    }

    /// Creates an in-memory storage configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let storage = Storage::new(StorageConfig::in_memory()).await?;
    /// // Storage is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        StorageConfig {
            storage_path: None,
            // Every in-memory connection is its own database; the pool must
            // hold exactly one
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run the migration on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Handle to the page's persistent key/value storage.
///
/// Cloning is cheap - the pool is reference counted. The cart store is the
/// only intended consumer; nothing else in the workspace touches SQLite.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Opens the storage and prepares the schema.
    ///
    /// ## What This Does
    /// 1. Creates the storage file if it doesn't exist (file-backed config)
    /// 2. Configures SQLite: WAL journal, NORMAL synchronous
    /// 3. Creates the connection pool
    /// 4. Runs the embedded migration (if enabled)
    pub async fn new(config: StorageConfig) -> StoreResult<Self> {
        let connect_options = match &config.storage_path {
            Some(path) => {
                info!(path = %path.display(), "Opening storage");
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    // WAL mode: reads never block the post-mutation write
                    .journal_mode(SqliteJournalMode::Wal)
                    // NORMAL synchronous: safe from corruption, may lose the
                    // very last write on a crash - acceptable for a cart
                    .synchronous(SqliteSynchronous::Normal)
            }
            None => {
                info!("Opening in-memory storage");
                SqliteConnectOptions::new().in_memory(true)
            }
        };

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        let storage = Storage { pool };

        if config.run_migrations {
            migrations::run_migrations(&storage.pool).await?;
        }

        Ok(storage)
    }

    /// Reads the value stored under a key.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - key present
    /// * `Ok(None)` - key absent (first visit, or never saved)
    /// * `Err(StoreError)` - infrastructure failure
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes (or overwrites) the value stored under a key.
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO local_storage (key, value, updated_at) \
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')) \
             ON CONFLICT(key) DO UPDATE SET \
             value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes the value stored under a key. Missing keys are a no-op.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Checks if the storage is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        info!("Closing storage pool");
        self.pool.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_storage() {
        let storage = Storage::new(StorageConfig::in_memory()).await.unwrap();
        assert!(storage.health_check().await);
    }

    #[tokio::test]
    async fn test_get_set_roundtrip() {
        let storage = Storage::new(StorageConfig::in_memory()).await.unwrap();

        assert_eq!(storage.get("k").await.unwrap(), None);

        storage.set("k", "v1").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some("v1".to_string()));

        // Overwrite under the same key
        storage.set("k", "v2").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some("v2".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let storage = Storage::new(StorageConfig::in_memory()).await.unwrap();

        storage.set("k", "v").await.unwrap();
        storage.remove("k").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), None);

        // Removing an absent key is a no-op
        storage.remove("k").await.unwrap();
    }

    #[test]
    fn test_config_builder() {
        let config = StorageConfig::new("/tmp/test.db").max_connections(4);
        assert_eq!(config.max_connections, 4);
        assert!(config.run_migrations);
    }
}
