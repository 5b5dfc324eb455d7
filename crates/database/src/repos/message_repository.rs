//! Repository for message data access operations.

use crate::entities::{Message, MessageKind, MessagePatch, NewMessage, BROADCAST_RECIPIENT};
use crate::types::RoomResult;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

const MESSAGE_COLUMNS: &str = "id, public_id, from_user, to_user, text, kind, time";

/// Repository for message database operations
#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    /// Create a new message repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a message, assigning its public identifier and display time.
    pub async fn insert(&self, new: &NewMessage) -> RoomResult<Message> {
        let public_id = cuid2::cuid();
        let time = display_time();

        let result = sqlx::query(
            "INSERT INTO messages (public_id, from_user, to_user, text, kind, time)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&public_id)
        .bind(&new.from_user)
        .bind(&new.to_user)
        .bind(&new.text)
        .bind(new.kind.as_str())
        .bind(&time)
        .execute(&self.pool)
        .await?;

        let message_id = result.last_insert_rowid();

        info!(
            message_id = message_id,
            public_id = %public_id,
            from = %new.from_user,
            kind = %new.kind,
            "stored message"
        );

        Ok(Message {
            id: message_id,
            public_id,
            from_user: new.from_user.clone(),
            to_user: new.to_user.clone(),
            text: new.text.clone(),
            kind: new.kind,
            time,
        })
    }

    /// Insert a batch of messages inside one transaction. Used by the
    /// presence reaper so a sweep's leave notices land together or not at all.
    pub async fn insert_many(&self, batch: &[NewMessage]) -> RoomResult<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let time = display_time();
        let mut tx = self.pool.begin().await?;

        for new in batch {
            sqlx::query(
                "INSERT INTO messages (public_id, from_user, to_user, text, kind, time)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(cuid2::cuid())
            .bind(&new.from_user)
            .bind(&new.to_user)
            .bind(&new.text)
            .bind(new.kind.as_str())
            .bind(&time)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(count = batch.len(), "stored message batch");
        Ok(())
    }

    /// Find a message by its public identifier.
    pub async fn find_by_public_id(&self, public_id: &str) -> RoomResult<Option<Message>> {
        let row = sqlx::query(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE public_id = ?"
        ))
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| row_to_message(&row)).transpose()
    }

    /// Messages visible to `user`: addressed to them, sent by them, or
    /// broadcast to the room. Chronological (insertion) order; with a limit,
    /// the newest `limit` rows are selected and restored to chronological
    /// order.
    pub async fn visible_to(&self, user: &str, limit: Option<i64>) -> RoomResult<Vec<Message>> {
        let rows = match limit {
            Some(limit) => {
                let mut rows = sqlx::query(&format!(
                    "SELECT {MESSAGE_COLUMNS} FROM messages
                     WHERE to_user = ? OR to_user = ? OR from_user = ?
                     ORDER BY id DESC LIMIT ?"
                ))
                .bind(user)
                .bind(BROADCAST_RECIPIENT)
                .bind(user)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;
                rows.reverse();
                rows
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {MESSAGE_COLUMNS} FROM messages
                     WHERE to_user = ? OR to_user = ? OR from_user = ?
                     ORDER BY id ASC"
                ))
                .bind(user)
                .bind(BROADCAST_RECIPIENT)
                .bind(user)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(row_to_message).collect()
    }

    /// Replace the mutable fields of a message and refresh its display time.
    pub async fn update(&self, public_id: &str, patch: &MessagePatch) -> RoomResult<()> {
        sqlx::query("UPDATE messages SET to_user = ?, text = ?, kind = ?, time = ? WHERE public_id = ?")
            .bind(&patch.to_user)
            .bind(&patch.text)
            .bind(patch.kind.as_str())
            .bind(display_time())
            .bind(public_id)
            .execute(&self.pool)
            .await?;

        info!(public_id = %public_id, "updated message");
        Ok(())
    }

    /// Delete a message by its public identifier.
    pub async fn delete(&self, public_id: &str) -> RoomResult<()> {
        sqlx::query("DELETE FROM messages WHERE public_id = ?")
            .bind(public_id)
            .execute(&self.pool)
            .await?;

        info!(public_id = %public_id, "deleted message");
        Ok(())
    }
}

fn row_to_message(row: &SqliteRow) -> RoomResult<Message> {
    let kind: String = row.try_get("kind")?;
    Ok(Message {
        id: row.try_get("id")?,
        public_id: row.try_get("public_id")?,
        from_user: row.try_get("from_user")?,
        to_user: row.try_get("to_user")?,
        text: row.try_get("text")?,
        kind: MessageKind::from(kind.as_str()),
        time: row.try_get("time")?,
    })
}

/// Wall-clock display timestamp. Staleness math never reads this string.
fn display_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
