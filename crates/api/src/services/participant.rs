//! Participant registry operations: login, heartbeat, listing.

use parley_database::{
    MessageRepository, NewMessage, Participant, ParticipantRepository, RoomError, RoomResult,
};

use super::{now_millis, ENTER_NOTICE};
use crate::sanitize::sanitize;
use crate::validate::Validator;

/// Register a participant. The name is validated raw, sanitized, then
/// inserted with a store-level uniqueness check so concurrent logins with
/// the same name produce exactly one winner. On success a join notice is
/// broadcast to the room.
pub async fn login(
    participants: &ParticipantRepository,
    messages: &MessageRepository,
    raw_name: &str,
) -> RoomResult<String> {
    Validator::participant_name(raw_name)?;

    let name = sanitize(raw_name);
    if name.is_empty() {
        return Err(RoomError::validation("name must not be empty"));
    }

    let inserted = participants.insert_if_absent(&name, now_millis()).await?;
    if !inserted {
        return Err(RoomError::name_taken(name));
    }

    messages
        .insert(&NewMessage::status_notice(name.clone(), ENTER_NOTICE))
        .await?;

    Ok(name)
}

/// Refresh a participant's activity timestamp.
pub async fn heartbeat(participants: &ParticipantRepository, name: &str) -> RoomResult<()> {
    let refreshed = participants.touch(name, now_millis()).await?;
    if !refreshed {
        return Err(RoomError::participant_not_found(name));
    }
    Ok(())
}

/// All current participants.
pub async fn list(participants: &ParticipantRepository) -> RoomResult<Vec<Participant>> {
    participants.list().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_repositories;
    use parley_database::MessageKind;

    #[tokio::test]
    async fn login_inserts_and_broadcasts_join_notice() {
        let (participants, messages, _guard) = test_repositories().await;

        let name = login(&participants, &messages, " <b>Ann</b> ").await.unwrap();
        assert_eq!(name, "Ann");

        let listed = list(&participants).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ann");

        let visible = messages.visible_to("bob", None).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, MessageKind::Status);
        assert_eq!(visible[0].from_user, "Ann");
        assert_eq!(visible[0].text, ENTER_NOTICE);
    }

    #[tokio::test]
    async fn second_login_with_same_sanitized_name_conflicts() {
        let (participants, messages, _guard) = test_repositories().await;

        login(&participants, &messages, "Ann").await.unwrap();
        let error = login(&participants, &messages, "<i>Ann</i>")
            .await
            .expect_err("duplicate should conflict");

        assert!(matches!(error, RoomError::NameTaken { name } if name == "Ann"));

        // Only the first login produced a join notice.
        let visible = messages.visible_to("bob", None).await.unwrap();
        assert_eq!(visible.len(), 1);
    }

    #[tokio::test]
    async fn login_rejects_markup_only_names() {
        let (participants, messages, _guard) = test_repositories().await;

        let error = login(&participants, &messages, "<br/>")
            .await
            .expect_err("markup-only name is invalid");
        assert!(matches!(error, RoomError::Validation { .. }));
    }

    #[tokio::test]
    async fn heartbeat_fails_for_unknown_participant() {
        let (participants, messages, _guard) = test_repositories().await;

        login(&participants, &messages, "Ann").await.unwrap();

        assert!(heartbeat(&participants, "Ann").await.is_ok());
        let error = heartbeat(&participants, "ghost")
            .await
            .expect_err("unknown participant");
        assert!(matches!(error, RoomError::ParticipantNotFound { .. }));
    }
}
