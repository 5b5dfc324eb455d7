use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use parley_database::Participant;

use crate::routes::models::LoginRequest;
use crate::services;
use crate::{ApiError, AppState};

/// Register a presence in the room.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<StatusCode, ApiError> {
    services::participant::login(state.participants(), state.messages(), &payload.name).await?;
    Ok(StatusCode::CREATED)
}

/// List all current participants.
pub async fn list_participants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    let participants = services::participant::list(state.participants()).await?;
    Ok(Json(participants))
}
