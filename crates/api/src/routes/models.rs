//! Request payloads for the HTTP surface.
//!
//! Fields default to empty strings so schema problems surface through the
//! validator (422 with a JSON error body) instead of a body-rejection.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
}

/// Body shared by send and edit. The sender never appears here; it is taken
/// from the caller-identity header.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<i64>,
}
