//! Message entity and related types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broadcast recipient sentinel.
pub const BROADCAST_RECIPIENT: &str = "all";

/// Classification of a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public chat message, visible to everyone.
    Message,
    /// Direct message, visible to sender and recipient only.
    PrivateMessage,
    /// System-authored join/leave notice.
    Status,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Message => "message",
            MessageKind::PrivateMessage => "private_message",
            MessageKind::Status => "status",
        }
    }

    /// Parse a user-supplied kind. Returns `None` for anything that is not
    /// a valid kind, including `status`, which only the system may author.
    pub fn parse_user_kind(value: &str) -> Option<Self> {
        match value {
            "message" => Some(MessageKind::Message),
            "private_message" => Some(MessageKind::PrivateMessage),
            _ => None,
        }
    }
}

impl From<&str> for MessageKind {
    fn from(value: &str) -> Self {
        match value {
            "private_message" => MessageKind::PrivateMessage,
            "status" => MessageKind::Status,
            _ => MessageKind::Message,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(skip_serializing)]
    pub id: i64,
    #[serde(rename = "id")]
    pub public_id: String,
    #[serde(rename = "from")]
    pub from_user: String,
    #[serde(rename = "to")]
    pub to_user: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Wall-clock display time (`HH:MM:SS`), set on insert and refreshed on edit.
    pub time: String,
}

/// Payload for inserting a message. The repository assigns the identifier
/// and the display time.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub from_user: String,
    pub to_user: String,
    pub text: String,
    pub kind: MessageKind,
}

impl NewMessage {
    /// System-authored status notice addressed to the whole room.
    pub fn status_notice(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from_user: name.into(),
            to_user: BROADCAST_RECIPIENT.to_string(),
            text: text.into(),
            kind: MessageKind::Status,
        }
    }
}

/// Replacement fields for an owned-message edit.
#[derive(Debug, Clone)]
pub struct MessagePatch {
    pub to_user: String,
    pub text: String,
    pub kind: MessageKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [
            MessageKind::Message,
            MessageKind::PrivateMessage,
            MessageKind::Status,
        ] {
            assert_eq!(MessageKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn user_kinds_exclude_status() {
        assert_eq!(
            MessageKind::parse_user_kind("message"),
            Some(MessageKind::Message)
        );
        assert_eq!(
            MessageKind::parse_user_kind("private_message"),
            Some(MessageKind::PrivateMessage)
        );
        assert_eq!(MessageKind::parse_user_kind("status"), None);
        assert_eq!(MessageKind::parse_user_kind("shout"), None);
    }

    #[test]
    fn status_notice_targets_broadcast() {
        let notice = NewMessage::status_notice("ann", "left the room...");
        assert_eq!(notice.to_user, BROADCAST_RECIPIENT);
        assert_eq!(notice.kind, MessageKind::Status);
    }
}
