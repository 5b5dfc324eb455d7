//! Repository for participant presence records.

use crate::entities::Participant;
use crate::types::RoomResult;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for participant database operations
#[derive(Clone)]
pub struct ParticipantRepository {
    pool: SqlitePool,
}

impl ParticipantRepository {
    /// Create a new participant repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a participant unless the name is already present.
    ///
    /// Uniqueness is enforced by the store in a single statement, so two
    /// concurrent logins with the same name cannot both win. Returns `true`
    /// when the row was inserted.
    pub async fn insert_if_absent(&self, name: &str, last_status: i64) -> RoomResult<bool> {
        let result = sqlx::query(
            "INSERT INTO participants (name, last_status) VALUES (?, ?)
             ON CONFLICT(name) DO NOTHING",
        )
        .bind(name)
        .bind(last_status)
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() == 1;
        if inserted {
            info!(name = %name, "participant joined");
        }
        Ok(inserted)
    }

    /// Refresh a participant's heartbeat timestamp. Returns `false` when no
    /// participant with that name exists.
    pub async fn touch(&self, name: &str, last_status: i64) -> RoomResult<bool> {
        let result = sqlx::query("UPDATE participants SET last_status = ? WHERE name = ?")
            .bind(last_status)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a participant is currently present.
    pub async fn exists(&self, name: &str) -> RoomResult<bool> {
        let row: Option<i64> = sqlx::query_scalar("SELECT id FROM participants WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// List all current participants in insertion order.
    pub async fn list(&self) -> RoomResult<Vec<Participant>> {
        let rows = sqlx::query("SELECT id, name, last_status FROM participants ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        let participants = rows
            .into_iter()
            .map(|row| {
                Ok(Participant {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    last_status: row.try_get("last_status")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(participants)
    }

    /// Remove every participant whose heartbeat predates `cutoff` and return
    /// their names. The staleness predicate is evaluated exactly once, inside
    /// the delete, so a heartbeat committed before this call always survives.
    pub async fn delete_stale(&self, cutoff: i64) -> RoomResult<Vec<String>> {
        let names: Vec<String> =
            sqlx::query_scalar("DELETE FROM participants WHERE last_status < ? RETURNING name")
                .bind(cutoff)
                .fetch_all(&self.pool)
                .await?;

        if !names.is_empty() {
            info!(count = names.len(), "reaped stale participants");
        }
        Ok(names)
    }
}
