//! Browser session persistence
//!
//! Tokens returned by the auth service are kept in localStorage so a reload
//! still knows who is signed in. On the server there is no storage: loads
//! return `None` and writes are no-ops.
//!
//! [`SupabaseClient`](crate::core::SupabaseClient) reaches the storage
//! through [`SessionStore`]; [`LocalSessionStore`] is the browser one.

use serde::{Deserialize, Serialize};

use crate::core::backend::Account;

/// Tokens expiring within this many seconds are treated as expired
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Persisted session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Unix timestamp (seconds) when the access token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<Account>,
}

impl StoredSession {
    /// Whether the access token is expired (or about to be) at `now`.
    ///
    /// Sessions without an expiry are trusted until the server rejects them.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at <= now + EXPIRY_MARGIN_SECS)
    }

    pub fn can_refresh(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}

/// Token response of the auth service (sign-in, refresh, auto-confirmed sign-up)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub user: Option<Account>,
}

impl TokenResponse {
    /// Convert into a storable session, deriving `expires_at` from
    /// `expires_in` when the service only sent the latter.
    pub fn into_session(self, now: i64) -> StoredSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now + secs));
        StoredSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Where the client keeps its session between page loads
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession) -> Result<(), String>;
    fn clear(&self);
}

/// localStorage entry under the project's `sb-<ref>-auth-token` key
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<StoredSession> {
        load(&self.key)
    }

    fn save(&self, session: &StoredSession) -> Result<(), String> {
        save(&self.key, session)
    }

    fn clear(&self) {
        clear(&self.key)
    }
}

/// Current Unix time in seconds
#[cfg(not(feature = "ssr"))]
pub fn now_secs() -> i64 {
    js_sys::Date::now() as i64 / 1000
}

#[cfg(feature = "ssr")]
pub fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the session stored under `key`
#[cfg(not(feature = "ssr"))]
fn load(key: &str) -> Option<StoredSession> {
    let json = local_storage()?.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Persist `session` under `key`
#[cfg(not(feature = "ssr"))]
fn save(key: &str, session: &StoredSession) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage not available")?;
    let json = serde_json::to_string(session).map_err(|e| e.to_string())?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Failed to store session".to_string())
}

/// Remove the session stored under `key`
#[cfg(not(feature = "ssr"))]
fn clear(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// SSR stubs - there is no browser storage on the server
#[cfg(feature = "ssr")]
fn load(_key: &str) -> Option<StoredSession> {
    None
}

#[cfg(feature = "ssr")]
fn save(_key: &str, _session: &StoredSession) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
fn clear(_key: &str) {}
