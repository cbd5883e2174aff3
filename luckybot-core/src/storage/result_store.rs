use crate::error::Result;
use crate::storage::Storage;
use crate::types::{ChatId, Participant, ResultRecord};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

pub struct ResultStore<'a> {
    storage: &'a Storage,
}

impl<'a> ResultStore<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub async fn find(&self, chat: ChatId, date: &str) -> Result<Option<ResultRecord>> {
        let conn = self.storage.get_connection().await;

        let record = conn
            .query_row(
                "SELECT date, winner_id, winner_name, winner_points
                 FROM results WHERE chat_id = ?1 AND date = ?2",
                params![chat.0, date],
                record_from_row,
            )
            .optional()?;

        Ok(record)
    }

    /// Store a draw unless the date already has one.
    ///
    /// Returns false when another result for the same date won the race;
    /// nothing is written in that case.
    pub async fn insert_if_absent(&self, chat: ChatId, record: &ResultRecord) -> Result<bool> {
        let conn = self.storage.get_connection().await;

        let inserted = conn.execute(
            "INSERT OR IGNORE INTO results
             (chat_id, date, winner_id, winner_name, winner_points, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                chat.0,
                record.date,
                record.winner.id,
                record.winner.name,
                record.winner.points,
                Utc::now().timestamp(),
            ],
        )?;

        if inserted == 0 {
            tracing::warn!(
                "Result for {} in chat {} already exists, skipping insert",
                record.date,
                chat
            );
        }

        Ok(inserted > 0)
    }

    /// All results of a chat, in insertion order.
    pub async fn list(&self, chat: ChatId) -> Result<Vec<ResultRecord>> {
        let conn = self.storage.get_connection().await;

        let mut stmt = conn.prepare(
            "SELECT date, winner_id, winner_name, winner_points
             FROM results WHERE chat_id = ?1 ORDER BY rowid ASC",
        )?;

        let rows = stmt.query_map(params![chat.0], record_from_row)?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }

        Ok(records)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ResultRecord> {
    Ok(ResultRecord {
        date: row.get(0)?,
        winner: Participant {
            id: row.get(1)?,
            name: row.get(2)?,
            points: row.get(3)?,
        },
    })
}
