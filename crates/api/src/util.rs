use axum::http::HeaderMap;

use crate::sanitize::sanitize;
use crate::ApiError;

/// Name of the caller-identity header.
pub const USER_HEADER: &str = "User";

/// Extract the caller identity from the `User` header.
///
/// The value is sanitized with the same routine as login names so ownership
/// and visibility comparisons happen in post-sanitization space.
pub fn require_user(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(USER_HEADER)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| ApiError::unprocessable_entity("missing User header"))?;

    let user = sanitize(value);
    if user.is_empty() {
        return Err(ApiError::unprocessable_entity("User header must not be empty"));
    }

    Ok(user)
}
