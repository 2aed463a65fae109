//! Client configuration.
//!
//! `ClientConfig::default()` matches the production defaults; `from_env`
//! applies the environment overrides on top of them.

use std::time::Duration;

use regex::Regex;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Environment variable overriding the backend base URL.
pub const ENV_BASE_URL: &str = "RETAIL_API_URL";
/// Environment variable overriding the request timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "RETAIL_API_TIMEOUT_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid RETAIL_API_TIMEOUT_MS value {value:?}: expected milliseconds")]
    InvalidTimeout { value: String },

    #[error("invalid silent endpoint pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Predicate over a request path, used for the silent endpoint list.
#[derive(Debug, Clone)]
pub enum PathMatcher {
    Exact(String),
    Prefix(String),
    Contains(String),
    Pattern(Regex),
}

impl PathMatcher {
    pub fn pattern(re: &str) -> Result<Self, ConfigError> {
        Ok(PathMatcher::Pattern(Regex::new(re)?))
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Exact(p) => path == p,
            PathMatcher::Prefix(p) => path.starts_with(p.as_str()),
            PathMatcher::Contains(p) => path.contains(p.as_str()),
            PathMatcher::Pattern(re) => re.is_match(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_headers: Vec<(String, String)>,
    pub timeout: Duration,
    /// Paths whose 5xx failures are expected during optimistic loads and must
    /// not produce a notification.
    pub silent_endpoints: Vec<PathMatcher>,
    /// Route the host navigates to when the session expires.
    pub login_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            timeout: DEFAULT_TIMEOUT,
            silent_endpoints: vec![
                PathMatcher::Contains("/sales".to_string()),
                PathMatcher::Contains("/analytics".to_string()),
            ],
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Defaults with `RETAIL_API_URL` / `RETAIL_API_TIMEOUT_MS` applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config.timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_silent_endpoints(mut self, matchers: Vec<PathMatcher>) -> Self {
        self.silent_endpoints = matchers;
        self
    }

    pub fn is_silent(&self, path: &str) -> bool {
        self.silent_endpoints.iter().any(|m| m.matches(path))
    }
}
