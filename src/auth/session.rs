//! Token-based session state: login, register, logout, lazy user fetch.
//!
//! The store is an explicit context object handed to every consumer - there
//! is no ambient global. It owns the cached user profile and writes the
//! shared [`TokenCell`] that the API client reads, so `is_authenticated` is
//! always a pure function of the current token.
//!
//! ERROR HANDLING
//! ==============
//! `login` and `register` propagate transport errors unchanged so the
//! presenting view can surface them. `fetch_user` absorbs its errors: a 401
//! invalidates the session (token and user cleared together), anything else
//! is logged and leaves the token in place so a later attempt can succeed.
//! That asymmetry is deliberate - a backend outage must not log users out.

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::api::{ApiError, AuthApi, Credentials, LoginResponse, RegisterRequest};
use crate::routing::{Navigator, Route};

use super::cookie::CookieStore;
use super::token::TokenCell;

pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    cookies: Arc<dyn CookieStore>,
    navigator: Arc<dyn Navigator>,
    token: TokenCell,
    user: RwLock<Option<Value>>,
    /// Serializes user fetches so concurrent callers join one in-flight
    /// request instead of issuing duplicates
    fetch_lock: Mutex<()>,
}

impl SessionStore {
    /// Build the store, restoring any persisted token from the cookie store.
    pub fn new(
        api: Arc<dyn AuthApi>,
        cookies: Arc<dyn CookieStore>,
        navigator: Arc<dyn Navigator>,
        token: TokenCell,
    ) -> Self {
        if let Some(saved) = cookies.load() {
            debug!("Restored persisted auth token");
            token.set(Some(saved));
        }

        Self {
            api,
            cookies,
            navigator,
            token,
            user: RwLock::new(None),
            fetch_lock: Mutex::new(()),
        }
    }

    /// True iff a token is present. Recomputed on every access.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_present()
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// The cached user profile, if one has been fetched this session.
    /// Never trust this without checking [`Self::is_authenticated`] first.
    pub fn user(&self) -> Option<Value> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_user(&self, user: Option<Value>) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = user;
    }

    /// Exchange credentials for a session. On success the token and profile
    /// are stored, the cookie is persisted, and the host is sent to the
    /// dashboard. Failures propagate unchanged with no state mutation.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self.api.login(credentials).await?;

        self.token.set(Some(response.token.clone()));
        if let Err(e) = self.cookies.store(&response.token) {
            warn!(error = %e, "Failed to persist auth cookie");
        }
        self.set_user(Some(response.user.clone()));

        self.navigator.navigate(Route::Dashboard);
        Ok(response)
    }

    /// Create an account and send the host to the login view. Registration
    /// never authenticates; failures propagate unchanged.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.api.register(request).await?;
        self.navigator.navigate(Route::Login);
        Ok(())
    }

    /// Clear the session locally and send the host to the login view.
    /// No server round-trip. Idempotent.
    pub fn logout(&self) {
        self.invalidate();
        self.navigator.navigate(Route::Login);
    }

    /// Populate the cached user profile from `GET /auth/me`.
    ///
    /// No-op when no token is present (any stale profile is dropped) or when
    /// a profile is already cached. Only a 401 invalidates the session;
    /// transient failures leave the token intact for a future retry. Errors
    /// are logged, never returned.
    pub async fn fetch_user(&self) {
        let _inflight = self.fetch_lock.lock().await;

        if !self.token.is_present() {
            // A profile without a token violates the session invariant
            self.set_user(None);
            return;
        }
        if self.user().is_some() {
            return;
        }

        match self.api.me().await {
            Ok(profile) => {
                debug!("Fetched user profile");
                self.set_user(Some(profile));
            }
            Err(e) if e.is_unauthorized() => {
                warn!("Token rejected by server, clearing session");
                self.invalidate();
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch user");
            }
        }
    }

    /// Drop token, profile, and persisted cookie together.
    fn invalidate(&self) {
        self.token.set(None);
        self.set_user(None);
        if let Err(e) = self.cookies.clear() {
            warn!(error = %e, "Failed to clear auth cookie");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
