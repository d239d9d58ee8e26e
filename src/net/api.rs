//! Auth endpoint helpers.
//!
//! ERROR HANDLING
//! ==============
//! These return the raw [`HttpError`] so the session store can decide which
//! failures carry a user-facing message and which end the session.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::HttpError;
use super::http::HttpClient;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const ME_ENDPOINT: &str = "/auth/me";

/// `POST /auth/login`. `username` may also be an email address.
///
/// # Errors
///
/// Returns the pipeline failure for non-2xx, transport, or decode errors.
pub async fn login(http: &HttpClient, username: &str, password: &str) -> Result<AuthResponse, HttpError> {
    http.post_json(LOGIN_ENDPOINT, &LoginRequest { username, password }).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the pipeline failure for non-2xx, transport, or decode errors.
pub async fn register(
    http: &HttpClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, HttpError> {
    http.post_json(REGISTER_ENDPOINT, &RegisterRequest { username, email, password }).await
}

/// `GET /auth/me` with the current credential.
///
/// # Errors
///
/// Returns 401/422 status errors for an invalid or expired credential.
pub async fn fetch_current_user(http: &HttpClient) -> Result<User, HttpError> {
    http.get_json(ME_ENDPOINT).await
}
