//! HTTP client for the Smartgement REST API.
//!
//! Thin wrapper over `reqwest` that joins endpoint paths onto the configured
//! base URL, speaks JSON in both directions, and attaches the bearer
//! `Authorization` header automatically whenever a token is present in the
//! shared [`TokenCell`].
//!
//! No retries and no request timeout live here: every failure fails exactly
//! the one call in progress, and a hanging server is visible to the caller.

use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::auth::TokenCell;

use super::types::{ApiEnvelope, Credentials, LoginData, LoginResponse, MeData, RegisterRequest};
use super::{ApiError, AuthApi};

/// API client for the Smartgement backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenCell,
}

impl ApiClient {
    /// Create a client for the given base URL. The token cell is shared with
    /// the session store so the bearer header tracks the live session.
    pub fn new(base_url: &str, token: TokenCell) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = self.token.get() {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::InvalidResponse(format!("Invalid token: {}", e)))?,
            );
        }
        Ok(headers)
    }

    /// Check if a response is successful, turning failures into classified errors.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn call<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        debug!(method = %method, url = %url, "API request");

        let mut request = self
            .client
            .request(method, &url)
            .headers(self.auth_headers()?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = Self::check_response(request.send().await?).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Bad JSON from {}: {}", url, e)))
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.call(Method::GET, endpoint, None::<&Value>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.call(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.call(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.call(Method::DELETE, endpoint, None::<&Value>).await
    }

    /// POST where the caller only cares about success, not the payload
    pub async fn post_unit<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(endpoint);
        debug!(url = %url, "API request");

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await?;

        Self::check_response(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let envelope: ApiEnvelope<LoginData> = self.post("/auth/login", credentials).await?;
        Ok(LoginResponse {
            message: envelope.message,
            token: envelope.data.token,
            user: envelope.data.user,
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post_unit("/auth/register", request).await
    }

    async fn me(&self) -> Result<Value, ApiError> {
        let envelope: ApiEnvelope<MeData> = self.get("/auth/me").await?;
        Ok(envelope.data.user)
    }
}
