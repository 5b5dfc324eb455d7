//! Schema validation for incoming payloads.
//!
//! Validation runs on the raw payload; sanitization happens only after a
//! payload passes.

use parley_database::{MessageKind, RoomError, RoomResult};

use crate::routes::models::MessageBody;

/// Validation utilities
pub struct Validator;

impl Validator {
    /// A participant payload needs a non-empty `name`.
    pub fn participant_name(name: &str) -> RoomResult<()> {
        if name.trim().is_empty() {
            return Err(RoomError::validation("name must not be empty"));
        }
        Ok(())
    }

    /// A message payload needs a non-empty `to`, a non-empty `text`, and a
    /// user-authorable `type`. Returns the parsed kind.
    pub fn message_body(body: &MessageBody) -> RoomResult<MessageKind> {
        if body.to.trim().is_empty() {
            return Err(RoomError::validation("to must not be empty"));
        }
        if body.text.trim().is_empty() {
            return Err(RoomError::validation("text must not be empty"));
        }
        MessageKind::parse_user_kind(&body.kind).ok_or_else(|| {
            RoomError::validation("type must be 'message' or 'private_message'")
        })
    }

    /// Optional `limit` query value; when present it must be positive.
    pub fn message_limit(limit: Option<i64>) -> RoomResult<Option<i64>> {
        match limit {
            Some(value) if value <= 0 => {
                Err(RoomError::validation("limit must be a positive integer"))
            }
            other => Ok(other),
        }
    }
}
