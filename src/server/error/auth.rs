use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no bearer token.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Bearer token could not be decoded, has a bad signature, or has expired.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token decoded but the user it names no longer exists.
    ///
    /// # Fields
    /// - User ID carried by the token
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Email and password do not match a user of the requested kind.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User is authenticated but lacks the required role.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the denied action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// First-admin registration code is wrong, expired or already used.
    #[error("Invalid or expired admin registration code")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized with
///   "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidAdminCode` → 400 Bad Request
///
/// All errors are logged at warn level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::InvalidAdminCode => (
                StatusCode::BAD_REQUEST,
                "Invalid or expired admin registration code",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
