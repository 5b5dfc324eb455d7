//! Message operations: send, visibility-filtered listing, owner-only
//! mutation.

use parley_database::{
    Message, MessagePatch, MessageRepository, NewMessage, ParticipantRepository, RoomError,
    RoomResult,
};

use crate::routes::models::MessageBody;
use crate::sanitize::sanitize;
use crate::validate::Validator;

/// Store a user-authored message. The sender is the caller identity, never
/// part of the payload, and must currently be in the room.
pub async fn send(
    participants: &ParticipantRepository,
    messages: &MessageRepository,
    from: &str,
    body: &MessageBody,
) -> RoomResult<Message> {
    let kind = Validator::message_body(body)?;

    if !participants.exists(from).await? {
        return Err(RoomError::validation(format!("unknown sender: {from}")));
    }

    messages
        .insert(&NewMessage {
            from_user: from.to_string(),
            to_user: sanitize(&body.to),
            text: sanitize(&body.text),
            kind,
        })
        .await
}

/// Messages visible to `user`, chronologically; with `limit`, the newest
/// `limit` of them.
pub async fn list_for(
    messages: &MessageRepository,
    user: &str,
    limit: Option<i64>,
) -> RoomResult<Vec<Message>> {
    let limit = Validator::message_limit(limit)?;
    messages.visible_to(user, limit).await
}

/// Delete a message; only its original sender may do so.
pub async fn delete_owned(
    messages: &MessageRepository,
    public_id: &str,
    requester: &str,
) -> RoomResult<()> {
    let message = messages
        .find_by_public_id(public_id)
        .await?
        .ok_or_else(|| RoomError::message_not_found(public_id))?;

    if message.from_user != requester {
        return Err(RoomError::not_owner(public_id));
    }

    messages.delete(public_id).await
}

/// Replace a message's `to`/`text`/`type` and refresh its time; only its
/// original sender may do so. The patch passes the same validation as a
/// fresh message, so an edit can never produce a system `status` notice.
pub async fn edit_owned(
    messages: &MessageRepository,
    public_id: &str,
    requester: &str,
    body: &MessageBody,
) -> RoomResult<()> {
    let kind = Validator::message_body(body)?;

    let message = messages
        .find_by_public_id(public_id)
        .await?
        .ok_or_else(|| RoomError::message_not_found(public_id))?;

    if message.from_user != requester {
        return Err(RoomError::not_owner(public_id));
    }

    messages
        .update(
            public_id,
            &MessagePatch {
                to_user: sanitize(&body.to),
                text: sanitize(&body.text),
                kind,
            },
        )
        .await
}
