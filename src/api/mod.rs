//! REST API client module for the Smartgement backend.
//!
//! This module provides the `ApiClient` wrapper around the configured base
//! URL and the `AuthApi` trait the session store calls through, so tests can
//! substitute a scripted transport.
//!
//! The API uses JWT bearer token authentication obtained through
//! the `/auth/login` endpoint.

pub mod client;
pub mod error;
pub mod types;

use async_trait::async_trait;
use serde_json::Value;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ApiEnvelope, Credentials, LoginData, LoginResponse, MeData, RegisterRequest};

/// Authentication endpoints consumed by the session store.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login` - exchange credentials for a token and profile.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/register` - create an account. Does not authenticate.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `GET /auth/me` - fetch the profile for the current bearer token.
    async fn me(&self) -> Result<Value, ApiError>;
}
