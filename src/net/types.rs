//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Shapes mirror the backend's JSON so serde stays the only translation layer.
//! Profile fields other than `id` default to empty because some responses only
//! carry a partial user record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/auth/login`, `/auth/register` and
/// `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /auth/login`. `username` also accepts an email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login/registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    /// Human-readable confirmation, unused by the client.
    #[serde(default)]
    pub message: Option<String>,
}
