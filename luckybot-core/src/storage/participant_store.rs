use crate::error::Result;
use crate::storage::Storage;
use crate::types::{ChatId, Participant};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantOrder {
    Registration,
    PointsDesc,
}

pub struct ParticipantStore<'a> {
    storage: &'a Storage,
}

impl<'a> ParticipantStore<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub async fn find(&self, chat: ChatId, id: i64) -> Result<Option<Participant>> {
        let conn = self.storage.get_connection().await;

        let participant = conn
            .query_row(
                "SELECT id, name, points FROM participants WHERE chat_id = ?1 AND id = ?2",
                params![chat.0, id],
                participant_from_row,
            )
            .optional()?;

        Ok(participant)
    }

    pub async fn insert(&self, chat: ChatId, participant: &Participant) -> Result<()> {
        let conn = self.storage.get_connection().await;

        conn.execute(
            "INSERT INTO participants (chat_id, id, name, points, registered_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                chat.0,
                participant.id,
                participant.name,
                participant.points,
                Utc::now().timestamp(),
            ],
        )?;

        Ok(())
    }

    pub async fn list(&self, chat: ChatId, order: ParticipantOrder) -> Result<Vec<Participant>> {
        let conn = self.storage.get_connection().await;

        let sql = match order {
            ParticipantOrder::Registration => {
                "SELECT id, name, points FROM participants WHERE chat_id = ?1
                 ORDER BY rowid ASC"
            }
            ParticipantOrder::PointsDesc => {
                "SELECT id, name, points FROM participants WHERE chat_id = ?1
                 ORDER BY points DESC, rowid ASC"
            }
        };

        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params![chat.0], participant_from_row)?;

        let mut participants = Vec::new();
        for participant in rows {
            participants.push(participant?);
        }

        Ok(participants)
    }

    /// Award one point. Returns false when the participant does not exist.
    pub async fn increment_points(&self, chat: ChatId, id: i64) -> Result<bool> {
        let conn = self.storage.get_connection().await;

        let updated = conn.execute(
            "UPDATE participants SET points = points + 1 WHERE chat_id = ?1 AND id = ?2",
            params![chat.0, id],
        )?;

        Ok(updated > 0)
    }
}

fn participant_from_row(row: &Row<'_>) -> rusqlite::Result<Participant> {
    Ok(Participant {
        id: row.get(0)?,
        name: row.get(1)?,
        points: row.get(2)?,
    })
}
