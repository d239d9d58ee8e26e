//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! WASM builds have no process environment, so overrides are captured with
//! `option_env!` when the crate is compiled. Parsing is split into pure helpers
//! so defaults and overrides are testable without touching the build env.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Statuses treated as "authentication rejected" by the HTTP wrapper.
///
/// 422 is included because the paired backend answers expired or malformed
/// JWTs with it.
pub const DEFAULT_AUTH_REJECTED_STATUSES: [u16; 2] = [401, 422];

/// Route paths with special meaning to the session core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPaths {
    pub login: String,
    pub register: String,
    pub home: String,
}

impl AuthPaths {
    /// Whether `path` is the login or registration page.
    pub fn is_auth_page(&self, path: &str) -> bool {
        path == self.login || path == self.register
    }
}

impl Default for AuthPaths {
    fn default() -> Self {
        Self { login: "/login".to_owned(), register: "/register".to_owned(), home: "/".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub request_timeout_ms: u32,
    pub token_storage_key: String,
    pub auth_rejected_statuses: Vec<u16>,
    pub paths: AuthPaths,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_vars(None, None, None)
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `AUCTION_API_BASE`: default `/api`
    /// - `AUCTION_REQUEST_TIMEOUT_MS`: default 10000
    /// - `AUCTION_TOKEN_KEY`: default `token`
    pub fn from_build_env() -> Self {
        Self::from_vars(
            option_env!("AUCTION_API_BASE"),
            option_env!("AUCTION_REQUEST_TIMEOUT_MS"),
            option_env!("AUCTION_TOKEN_KEY"),
        )
    }

    /// Build config from raw optional values, falling back to defaults for
    /// missing or unparseable entries.
    pub fn from_vars(api_base: Option<&str>, timeout_ms: Option<&str>, token_key: Option<&str>) -> Self {
        Self {
            api_base: parse_api_base(api_base),
            request_timeout_ms: parse_timeout_ms(timeout_ms),
            token_storage_key: non_empty_or(token_key, DEFAULT_TOKEN_STORAGE_KEY),
            auth_rejected_statuses: DEFAULT_AUTH_REJECTED_STATUSES.to_vec(),
            paths: AuthPaths::default(),
        }
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    non_empty_or(raw, DEFAULT_API_BASE).trim_end_matches('/').to_owned()
}

fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

fn non_empty_or(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}
