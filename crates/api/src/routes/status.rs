use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::services;
use crate::util::require_user;
use crate::{ApiError, AppState};

/// Heartbeat: refresh the caller's activity timestamp.
pub async fn heartbeat(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let user = require_user(&headers)?;
    services::participant::heartbeat(state.participants(), &user).await?;
    Ok(StatusCode::OK)
}
