//! Wire types for the Smartgement API.
//!
//! Every endpoint wraps its payload in the same envelope:
//! `{"success": bool, "message": string, "data": ...}`. The user profile is
//! deliberately kept as raw JSON - this layer only caches and hands it to the
//! host, it never interprets individual fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope shared by all API endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Login credentials sent to `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Token produced by the reCAPTCHA widget, verified server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

/// Registration payload sent to `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

/// Payload of a successful login: the bearer token plus the user profile
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: Value,
}

/// Full login response, returned to the caller for inspection
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub message: Option<String>,
    pub token: String,
    pub user: Value,
}

/// Payload of `GET /auth/me`
#[derive(Debug, Clone, Deserialize)]
pub struct MeData {
    pub user: Value,
}
