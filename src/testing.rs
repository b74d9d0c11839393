//! Test doubles shared by the session and guard tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, AuthApi, Credentials, LoginResponse, RegisterRequest};
use crate::routing::{Navigator, Route};

/// `AuthApi` double with scripted responses and call counters.
///
/// Responses are consumed once; an unscripted call fails loudly so a test
/// that triggers an unexpected request cannot pass by accident.
#[derive(Default)]
pub struct ScriptedApi {
    login_response: Mutex<Option<Result<LoginResponse, ApiError>>>,
    register_response: Mutex<Option<Result<(), ApiError>>>,
    me_response: Mutex<Option<Result<Value, ApiError>>>,
    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub me_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_ok(self, token: &str, user: Value) -> Self {
        *self
            .login_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Ok(LoginResponse {
            message: Some("Login successful".to_string()),
            token: token.to_string(),
            user,
        }));
        self
    }

    pub fn login_err(self, error: ApiError) -> Self {
        *self
            .login_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Err(error));
        self
    }

    pub fn register_ok(self) -> Self {
        *self
            .register_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Ok(()));
        self
    }

    pub fn register_err(self, error: ApiError) -> Self {
        *self
            .register_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Err(error));
        self
    }

    pub fn me_ok(self, user: Value) -> Self {
        *self
            .me_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Ok(user));
        self
    }

    pub fn me_err(self, error: ApiError) -> Self {
        *self
            .me_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Err(error));
        self
    }
}

#[async_trait]
impl AuthApi for ScriptedApi {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_else(|| panic!("Unscripted login call"))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<(), ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.register_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_else(|| panic!("Unscripted register call"))
    }

    async fn me(&self) -> Result<Value, ApiError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        self.me_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_else(|| panic!("Unscripted me call"))
    }
}

/// Navigator that records every requested route.
#[derive(Default)]
pub struct TrackingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl TrackingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }
}

impl Navigator for TrackingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
