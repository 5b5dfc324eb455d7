//! Error types for the chat room.

use thiserror::Error;

/// Result type alias for chat-room operations
pub type RoomResult<T> = Result<T, RoomError>;

/// Main error type for the chat room
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid input: {message}")]
    Validation { message: String },

    #[error("Participant name already taken: {name}")]
    NameTaken { name: String },

    #[error("Participant not found: {name}")]
    ParticipantNotFound { name: String },

    #[error("Message not found: {id}")]
    MessageNotFound { id: String },

    #[error("Not the sender of message {id}")]
    NotOwner { id: String },
}

impl RoomError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a duplicate-name error
    pub fn name_taken(name: impl Into<String>) -> Self {
        Self::NameTaken { name: name.into() }
    }

    /// Create a not found error for participants
    pub fn participant_not_found(name: impl Into<String>) -> Self {
        Self::ParticipantNotFound { name: name.into() }
    }

    /// Create a not found error for messages
    pub fn message_not_found(id: impl Into<String>) -> Self {
        Self::MessageNotFound { id: id.into() }
    }

    /// Create an ownership error
    pub fn not_owner(id: impl Into<String>) -> Self {
        Self::NotOwner { id: id.into() }
    }
}
