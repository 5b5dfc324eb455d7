//! Domain entities for the persistence layer.

pub mod message;
pub mod participant;

pub use message::{Message, MessageKind, MessagePatch, NewMessage, BROADCAST_RECIPIENT};
pub use participant::Participant;
