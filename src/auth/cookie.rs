//! Persisted auth cookie.
//!
//! The token survives restarts as an `auth_token` cookie record with fixed
//! attributes: path `/`, max-age 7 days, SameSite Strict, and Secure in
//! production deployments. Persistence sits behind the [`CookieStore`] trait
//! so hosts can swap the file-backed store for their own (or for the
//! in-memory store when sessions should not outlive the process).

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Environment;

/// Cookie key for the bearer token
pub const COOKIE_NAME: &str = "auth_token";

/// Cookie path attribute
pub const COOKIE_PATH: &str = "/";

/// Cookie lifetime in days
pub const COOKIE_MAX_AGE_DAYS: i64 = 7;

/// Cookie file name inside the app cache directory
const COOKIE_FILE: &str = "auth_cookie.json";

/// App directory name under the user cache dir
const APP_DIR: &str = "smartgement";

/// The `auth_token` cookie record, attributes included, as a browser would
/// store it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCookie {
    pub value: String,
    pub secure: bool,
    pub expires_at: DateTime<Utc>,
}

impl AuthCookie {
    pub fn new(token: &str, environment: Environment) -> Self {
        Self {
            value: token.to_string(),
            secure: environment.is_production(),
            expires_at: Utc::now() + Duration::days(COOKIE_MAX_AGE_DAYS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Render the cookie as a `Set-Cookie` header value, for hosts that
    /// forward the session through an HTTP response.
    pub fn set_cookie_value(&self) -> String {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}; SameSite=Strict",
            COOKIE_NAME,
            self.value,
            COOKIE_PATH,
            Duration::days(COOKIE_MAX_AGE_DAYS).num_seconds(),
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Persistence seam for the auth cookie.
pub trait CookieStore: Send + Sync {
    /// Return the persisted token, if one exists and has not expired.
    fn load(&self) -> Option<String>;

    /// Persist a fresh cookie for the given token.
    fn store(&self, token: &str) -> Result<()>;

    /// Drop any persisted cookie. Safe to call when none exists.
    fn clear(&self) -> Result<()>;
}

/// File-backed cookie store under the user cache directory.
pub struct FileCookieStore {
    path: PathBuf,
    environment: Environment,
}

impl FileCookieStore {
    pub fn open(environment: Environment) -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(Self::with_path(
            cache_dir.join(APP_DIR).join(COOKIE_FILE),
            environment,
        ))
    }

    pub fn with_path(path: PathBuf, environment: Environment) -> Self {
        Self { path, environment }
    }
}

impl CookieStore for FileCookieStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let contents = std::fs::read_to_string(&self.path).ok()?;
        let cookie: AuthCookie = serde_json::from_str(&contents).ok()?;

        if cookie.is_expired() {
            debug!("Persisted auth cookie has expired");
            return None;
        }
        Some(cookie.value)
    }

    fn store(&self, token: &str) -> Result<()> {
        let cookie = AuthCookie::new(token, self.environment);
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&cookie)?;
        std::fs::write(&self.path, contents).context("Failed to write auth cookie")?;
        debug!(path = %self.path.display(), "Persisted auth cookie");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove auth cookie")?;
        }
        Ok(())
    }
}

/// In-memory cookie store. Sessions do not survive the process; also the
/// store of choice in tests.
#[derive(Default)]
pub struct MemoryCookieStore {
    token: Mutex<Option<String>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CookieStore for MemoryCookieStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
