//! Client core for the Smartgement API.
//!
//! This crate carries the pieces of the front-end that have a contract worth
//! testing: the authentication session lifecycle, the authenticated HTTP
//! wrapper, and the route guard that gates protected views. Rendering and
//! navigation are left to the host; they plug in through the [`Navigator`]
//! and [`CookieStore`] seams.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use smartgement_client::{build_session, RouteGuard, RuntimeConfig};
//! use smartgement_client::routing::{Navigator, Route};
//!
//! struct HostNavigator;
//!
//! impl Navigator for HostNavigator {
//!     fn navigate(&self, route: Route) {
//!         println!("-> {}", route.path());
//!     }
//! }
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = RuntimeConfig::from_env()?;
//! let session = build_session(&config, Arc::new(HostNavigator))?;
//! let guard = RouteGuard::new(session.clone());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod routing;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::{Context, Result};

pub use api::{ApiClient, ApiError};
pub use auth::{Credentials, RegisterRequest, SessionStore, TokenCell};
pub use config::RuntimeConfig;
pub use routing::{GuardOutcome, Navigator, Route, RouteGuard};

use auth::cookie::FileCookieStore;

/// Wire up a session store backed by the real API client and the file-backed
/// cookie store, restoring any persisted token.
///
/// The token cell is shared between the store and the client, so the bearer
/// header always reflects the current session.
pub fn build_session(
    config: &RuntimeConfig,
    navigator: Arc<dyn Navigator>,
) -> Result<Arc<SessionStore>> {
    let token = TokenCell::new();
    let api = ApiClient::new(&config.api_base, token.clone())
        .context("Failed to build API client")?;
    let cookies = FileCookieStore::open(config.environment)
        .context("Failed to open cookie store")?;

    Ok(Arc::new(SessionStore::new(
        Arc::new(api),
        Arc::new(cookies),
        navigator,
        token,
    )))
}
