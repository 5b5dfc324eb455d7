//! Participant entity.

use serde::Serialize;

/// A named, currently-present chat user tracked by last-heartbeat time.
///
/// `last_status` is an epoch-millisecond clock value; staleness comparisons
/// use it directly and never parse display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    #[serde(skip_serializing)]
    pub id: i64,
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}
