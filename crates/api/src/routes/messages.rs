use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use parley_database::Message;

use crate::routes::models::{ListMessagesQuery, MessageBody};
use crate::services;
use crate::util::require_user;
use crate::{ApiError, AppState};

/// Store a message authored by the caller.
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MessageBody>,
) -> Result<StatusCode, ApiError> {
    let from = require_user(&headers)?;
    services::message::send(state.participants(), state.messages(), &from, &payload).await?;
    Ok(StatusCode::CREATED)
}

/// List the messages visible to the caller, newest-limited when requested.
pub async fn list_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let user = require_user(&headers)?;
    let messages = services::message::list_for(state.messages(), &user, query.limit).await?;
    Ok(Json(messages))
}

/// Delete one of the caller's own messages.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let requester = require_user(&headers)?;
    services::message::delete_owned(state.messages(), &message_id, &requester).await?;
    Ok(StatusCode::OK)
}

/// Replace one of the caller's own messages.
pub async fn edit_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<MessageBody>,
) -> Result<StatusCode, ApiError> {
    let requester = require_user(&headers)?;
    services::message::edit_owned(state.messages(), &message_id, &requester, &payload).await?;
    Ok(StatusCode::OK)
}
