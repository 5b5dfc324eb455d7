use sqlx::SqlitePool;

use parley_database::{MessageRepository, ParticipantRepository};

#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
    participants: ParticipantRepository,
    messages: MessageRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            participants: ParticipantRepository::new(pool.clone()),
            messages: MessageRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn db_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn participants(&self) -> &ParticipantRepository {
        &self.participants
    }

    pub fn messages(&self) -> &MessageRepository {
        &self.messages
    }
}
