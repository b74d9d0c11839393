//! Authentication module for managing the client session.
//!
//! This module provides:
//! - `SessionStore`: token + cached profile with login/register/logout and
//!   lazy user fetch
//! - `TokenCell`: the shared token slot read by the API client
//! - `cookie`: the persisted `auth_token` cookie and its storage seam
//!
//! The token persists across restarts via the cookie store; the user profile
//! never does and is refetched on demand.

pub mod cookie;
pub mod session;
pub mod token;

pub use cookie::{AuthCookie, CookieStore, FileCookieStore, MemoryCookieStore};
pub use session::SessionStore;
pub use token::TokenCell;

// Credential shapes live with the wire types but belong to this surface too.
pub use crate::api::{Credentials, RegisterRequest};
