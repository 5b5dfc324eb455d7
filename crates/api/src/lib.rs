mod error;
mod sanitize;
mod state;
mod util;
mod validate;

pub mod routes;
pub mod services;

pub use error::ApiError;
pub use sanitize::sanitize;
pub use services::PresenceReaper;
pub use state::AppState;
pub use util::{require_user, USER_HEADER};

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderName;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/participants", post(routes::participants::login))
        .route("/participants", get(routes::participants::list_participants))
        .route("/messages", post(routes::messages::send_message))
        .route("/messages", get(routes::messages::list_messages))
        .route("/messages/:message_id", put(routes::messages::edit_message))
        .route(
            "/messages/:message_id",
            delete(routes::messages::delete_message),
        )
        .route("/status", post(routes::status::heartbeat))
        .with_state(state)
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("user")])
}
