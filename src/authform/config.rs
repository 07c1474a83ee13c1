//! Client configuration: where the authentication service lives, where to go
//! after a successful flow, and how long to wait for a response. Values are
//! public; do not store secrets here.

use anyhow::{anyhow, Context, Result};
use std::time::Duration;
use url::Url;

/// Local development address of the authentication service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Resource shown after a successful login or signup.
pub const DEFAULT_LANDING: &str = "index.html";
/// Default request timeout (seconds) applied to every call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const ROOT_PATH: &str = "/";

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub base_url: Url,
    pub landing: String,
    pub timeout: Duration,
}

impl AuthConfig {
    /// Builds a config for `base_url` with default landing and timeout.
    ///
    /// # Errors
    /// Returns an error if `base_url` is empty, not a URL, or not http(s).
    pub fn new(base_url: &str) -> Result<Self> {
        let base = normalize_value(base_url).ok_or_else(|| anyhow!("service URL is empty"))?;
        let base_url = Url::parse(&base).with_context(|| format!("invalid service URL: {base}"))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => return Err(anyhow!("unsupported scheme {scheme} in service URL")),
        }

        Ok(Self {
            base_url,
            landing: DEFAULT_LANDING.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[must_use]
    pub fn with_landing(mut self, landing: &str) -> Self {
        if let Some(value) = normalize_value(landing) {
            self.landing = value;
        }
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = timeout;
        }
        self
    }

    /// Joins `path` onto the base URL, keeping any path prefix of the base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(self.base_url.as_str(), path)
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
