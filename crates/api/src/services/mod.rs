//! Business rules over the repositories. Handlers stay as glue; every
//! precondition check lives here.

pub mod message;
pub mod participant;
pub mod presence;

pub use presence::PresenceReaper;

/// Text of the system notice appended when a participant logs in.
pub(crate) const ENTER_NOTICE: &str = "entered the room...";

/// Text of the system notice appended when the reaper evicts a participant.
pub(crate) const LEAVE_NOTICE: &str = "left the room...";

/// Epoch-millisecond clock used for heartbeat bookkeeping. Display
/// timestamps are formatted separately by the message repository.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
