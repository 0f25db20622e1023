//! Backend configuration.
//!
//! The server loads it with `BackendConfig::from_env()` after calling
//! `dotenvy::dotenv()`. The browser bundle has no process environment, so it
//! uses the values baked in at compile time via `BackendConfig::from_build_env()`.

/// Environment variable holding the hosted backend base URL
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the public (anon) API key
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL is not set")]
    MissingUrl,

    #[error("SUPABASE_ANON_KEY is not set")]
    MissingAnonKey,

    #[error("Backend URL must start with http:// or https:// (got {0:?})")]
    InvalidUrl(String),
}

/// Hosted backend endpoint and public key.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Base URL without trailing slash.
    /// Example: https://abcdefgh.supabase.co
    pub url: String,

    /// Public API key sent with every request
    pub anon_key: String,
}

impl BackendConfig {
    /// Validate and build a configuration.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().trim_end_matches('/');
        let anon_key: String = anon_key.into();
        let anon_key = anon_key.trim().to_string();

        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }
        if anon_key.is_empty() {
            return Err(ConfigError::MissingAnonKey);
        }

        Ok(Self {
            url: url.to_string(),
            anon_key,
        })
    }

    /// Build from optional raw values, as read from an environment.
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url.ok_or(ConfigError::MissingUrl)?;
        let anon_key = anon_key.ok_or(ConfigError::MissingAnonKey)?;
        Self::new(url, anon_key)
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(URL_VAR).ok();
        let anon_key = std::env::var(ANON_KEY_VAR).ok();
        Self::from_parts(url.as_deref(), anon_key.as_deref())
    }

    /// Load configuration captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Project reference: the first DNS label of the backend host.
    ///
    /// `https://abcdefgh.supabase.co` -> `abcdefgh`
    pub fn project_ref(&self) -> &str {
        let host = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        let host = host.split(['/', ':']).next().unwrap_or(host);
        host.split('.').next().unwrap_or(host)
    }

    /// localStorage key under which the browser session is persisted
    pub fn session_storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}
