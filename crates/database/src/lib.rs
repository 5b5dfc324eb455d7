//! Parley Database Crate
//!
//! This crate provides persistence for the parley chat-room backend:
//! connection management, migrations, entities, and the repositories the
//! service layer builds on. Uniqueness and staleness rules that must hold
//! under concurrent requests live here as single-statement SQL (conditional
//! insert, conditional update, delete-returning) rather than in-process
//! locks.

use sqlx::SqlitePool;

use parley_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::{MessageRepository, ParticipantRepository};

// Re-export entities
pub use entities::{
    Message, MessageKind, MessagePatch, NewMessage, Participant, BROADCAST_RECIPIENT,
};

// Re-export types
pub use types::{RoomError, RoomResult};

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let pool = prepare_database(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}


#[cfg(test)]
mod tests {
    use super::test_support::create_test_pool;

    #[tokio::test]
    async fn initialize_database_applies_schema() {
        let (pool, _temp_dir) = create_test_pool().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM participants")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
