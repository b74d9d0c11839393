//! Runtime configuration consumed by the client core.
//!
//! The host deployment supplies base URLs for the primary API and the
//! auxiliary AI service, plus the reCAPTCHA site key for the login widget.
//! Values are read from the environment, with `.env` support for local
//! development.

use std::collections::HashMap;

use anyhow::{anyhow, Result};

/// Environment variable holding the primary API base URL
const API_BASE_VAR: &str = "SMARTGEMENT_API_BASE";

/// Environment variable holding the auxiliary AI service base URL
const AI_BASE_VAR: &str = "SMARTGEMENT_AI_BASE";

/// Environment variable holding the reCAPTCHA site key
const RECAPTCHA_SITE_KEY_VAR: &str = "SMARTGEMENT_RECAPTCHA_SITE_KEY";

/// Environment variable selecting the deployment environment
const ENV_VAR: &str = "SMARTGEMENT_ENV";

/// Deployment environment. Controls the Secure attribute on the auth cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Base URL for the primary API, e.g. `https://api.smartgement.app/api`
    pub api_base: String,
    /// Base URL for the auxiliary AI service, if deployed
    pub ai_base: Option<String>,
    /// Site key for the reCAPTCHA widget; surfaced to the host, never used here
    pub recaptcha_site_key: Option<String>,
    pub environment: Environment,
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    /// A `.env` file is applied first if present (silently ignored if not).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(std::env::vars().collect())
    }

    /// Build configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let api_base = vars
            .get(API_BASE_VAR)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow!("{} is not set", API_BASE_VAR))?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            ai_base: vars
                .get(AI_BASE_VAR)
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_end_matches('/').to_string()),
            recaptcha_site_key: vars.get(RECAPTCHA_SITE_KEY_VAR).cloned(),
            environment: Environment::parse(vars.get(ENV_VAR).map(String::as_str)),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
