use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parley_database::RoomError;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<RoomError> for ApiError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::Validation { message } => Self::unprocessable_entity(message),
            RoomError::NameTaken { name } => {
                Self::conflict(format!("participant name already taken: {name}"))
            }
            RoomError::ParticipantNotFound { name } => {
                Self::not_found(format!("participant not found: {name}"))
            }
            RoomError::MessageNotFound { id } => {
                Self::not_found(format!("message not found: {id}"))
            }
            // Ownership mismatches surface as 401, not 403.
            RoomError::NotOwner { id } => {
                Self::unauthorized(format!("not the sender of message {id}"))
            }
            RoomError::Database(db_error) => {
                error!(error = ?db_error, "database error");
                Self::internal_server_error("database operation failed")
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        error!(error = ?error, "internal error");
        Self::internal_server_error(error.to_string())
    }
}
