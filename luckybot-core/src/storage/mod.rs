pub mod participant_store;
pub mod result_store;

pub use participant_store::{ParticipantOrder, ParticipantStore};
pub use result_store::ResultStore;

use crate::error::{LuckyError, Result};
use rusqlite::Connection;
use std::path::Path;
use tokio::sync::Mutex;

/// SQLite document store. Every row carries the chat it belongs to.
pub struct Storage {
    conn: Mutex<Connection>,
}

impl Storage {
    pub async fn new(db_path: &Path) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LuckyError::internal(format!("Failed to create directory: {}", e)))?;
        }

        let conn = Connection::open(db_path)?;
        let storage = Self {
            conn: Mutex::new(conn),
        };

        storage.init_schema().await?;
        tracing::debug!("Opened storage at {}", db_path.display());
        Ok(storage)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS participants (
                chat_id INTEGER NOT NULL,
                id INTEGER NOT NULL,
                name TEXT NOT NULL,
                points INTEGER NOT NULL DEFAULT 0,
                registered_at INTEGER NOT NULL,
                PRIMARY KEY (chat_id, id)
            )",
            [],
        )?;

        // The date doubles as the dedup key for draws.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS results (
                chat_id INTEGER NOT NULL,
                date TEXT NOT NULL,
                winner_id INTEGER NOT NULL,
                winner_name TEXT NOT NULL,
                winner_points INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (chat_id, date)
            )",
            [],
        )?;

        Ok(())
    }

    pub async fn get_connection(&self) -> tokio::sync::MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
