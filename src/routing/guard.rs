//! Gate evaluated before a protected view renders.
//!
//! Policy, in order:
//! 1. No token - redirect to login immediately, no fetch attempted.
//! 2. Token but no cached profile - await `fetch_user` before deciding.
//! 3. Re-check afterwards: the fetch clears the token on a 401.
//! 4. Otherwise let navigation proceed.
//!
//! The guard adds no retries and no timeout of its own; it inherits whatever
//! failure behavior `fetch_user` exposes. Applying the redirect is the
//! host's job.

use std::sync::Arc;

use tracing::debug;

use crate::auth::SessionStore;

use super::Route;

/// Decision for a pending navigation into a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(Route),
}

pub struct RouteGuard {
    session: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub async fn check(&self) -> GuardOutcome {
        if !self.session.is_authenticated() {
            debug!("No session token, redirecting to login");
            return GuardOutcome::Redirect(Route::Login);
        }

        if self.session.user().is_none() {
            self.session.fetch_user().await;

            // The fetch may have invalidated the session on a 401
            if !self.session.is_authenticated() {
                debug!("Session invalidated during fetch, redirecting to login");
                return GuardOutcome::Redirect(Route::Login);
            }
        }

        GuardOutcome::Allow
    }
}

// ============================================================================
// Tests
// ============================================================================
