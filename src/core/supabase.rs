//! Supabase implementation of [`BackendClient`]
//!
//! Talks to the hosted GoTrue (`/auth/v1`) and PostgREST (`/rest/v1`) APIs.
//! Requests are described by [`ApiRequest`] and handed to a [`Transport`];
//! the browser one sends them with `gloo-net`. Responses are decoded by
//! plain functions.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::backend::{Account, BackendClient, BackendError, SignUpResponse};
use crate::core::config::BackendConfig;
use crate::core::session::{self, LocalSessionStore, SessionStore, StoredSession, TokenResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Description of one HTTP call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: String,
    pub body: Option<serde_json::Value>,
    pub prefer: Option<&'static str>,
}

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-success response into an error
    pub fn error_for_status(self) -> Result<Self, BackendError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(BackendError::api(
                self.status,
                error_message(self.status, &self.body),
            ))
        }
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, BackendError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Error body fields used by GoTrue and PostgREST
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Extract a human readable message from an error response body.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let non_empty = |m: &String| !m.trim().is_empty();
        if let Some(message) = parsed
            .msg
            .filter(non_empty)
            .or(parsed.message.filter(non_empty))
            .or(parsed.error_description.filter(non_empty))
            .or(parsed.error.filter(non_empty))
        {
            return message;
        }
    }

    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

/// Decode a sign-up response.
///
/// With email confirmation enabled the service returns the bare user; with
/// auto-confirm it returns a full session whose `user` field holds it.
pub fn parse_sign_up(
    body: &str,
    now: i64,
) -> Result<(SignUpResponse, Option<StoredSession>), BackendError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("access_token").is_some() {
        let tokens: TokenResponse = serde_json::from_value(value)?;
        let stored = tokens.into_session(now);
        let response = SignUpResponse {
            user: stored.user.clone(),
        };
        return Ok((response, Some(stored)));
    }

    let user = match value.get("user") {
        Some(serde_json::Value::Null) => None,
        Some(user) => Some(serde_json::from_value(user.clone())?),
        None if value.is_object() => Some(serde_json::from_value(value)?),
        None => None,
    };

    Ok((SignUpResponse { user }, None))
}

/// Sends an [`ApiRequest`] and returns the raw response
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BackendError>;
}

/// Browser transport built on `gloo-net`
#[derive(Debug, Clone)]
pub struct FetchTransport {
    anon_key: String,
}

impl FetchTransport {
    pub fn new(anon_key: impl Into<String>) -> Self {
        Self {
            anon_key: anon_key.into(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    #[cfg(not(feature = "ssr"))]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BackendError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        let mut builder = builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", request.bearer));
        if let Some(prefer) = request.prefer {
            builder = builder.header("Prefer", prefer);
        }

        let req = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(serde_json::to_string(&body)?),
            None => builder.build(),
        }
        .map_err(|e| BackendError::Network(e.to_string()))?;

        let response = req
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }

    #[cfg(feature = "ssr")]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, BackendError> {
        Err(BackendError::Network(format!(
            "{} is only reachable from the browser",
            request.url
        )))
    }
}

/// Client for a hosted Supabase project
#[derive(Clone)]
pub struct SupabaseClient {
    config: BackendConfig,
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
}

impl SupabaseClient {
    /// Client using `gloo-net` and localStorage
    pub fn new(config: BackendConfig) -> Self {
        let transport = Arc::new(FetchTransport::new(config.anon_key.clone()));
        let store = Arc::new(LocalSessionStore::new(config.session_storage_key()));
        Self::with_parts(config, transport, store)
    }

    pub fn with_parts(
        config: BackendConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
        }
    }

    fn stored_session(&self) -> Option<StoredSession> {
        self.store.load()
    }

    fn store_session(&self, stored: &StoredSession) {
        if let Err(e) = self.store.save(stored) {
            leptos::logging::warn!("Could not persist session: {}", e);
        }
    }

    fn clear_session(&self) {
        self.store.clear();
    }

    /// Bearer for table requests: the session token if signed in, else the anon key
    fn rest_bearer(&self) -> String {
        self.stored_session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    pub fn sign_up_request(&self, email: &str, password: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: self.config.auth_url("signup"),
            bearer: self.config.anon_key.clone(),
            body: Some(serde_json::json!({ "email": email, "password": password })),
            prefer: None,
        }
    }

    pub fn password_grant_request(&self, email: &str, password: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: self.config.auth_url("token?grant_type=password"),
            bearer: self.config.anon_key.clone(),
            body: Some(serde_json::json!({ "email": email, "password": password })),
            prefer: None,
        }
    }

    pub fn refresh_request(&self, refresh_token: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: self.config.auth_url("token?grant_type=refresh_token"),
            bearer: self.config.anon_key.clone(),
            body: Some(serde_json::json!({ "refresh_token": refresh_token })),
            prefer: None,
        }
    }

    pub fn user_request(&self, access_token: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: self.config.auth_url("user"),
            bearer: access_token.to_string(),
            body: None,
            prefer: None,
        }
    }

    pub fn logout_request(&self, access_token: &str) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: self.config.auth_url("logout"),
            bearer: access_token.to_string(),
            body: None,
            prefer: None,
        }
    }

    /// Single-record insert; the body is a one-element array
    pub fn insert_request(
        &self,
        table: &str,
        record: serde_json::Value,
        bearer: String,
    ) -> ApiRequest {
        ApiRequest {
            method: Method::Post,
            url: self.config.rest_url(table),
            bearer,
            body: Some(serde_json::Value::Array(vec![record])),
            prefer: Some("return=minimal"),
        }
    }

    pub fn select_request(&self, table: &str, id: &str, bearer: String) -> ApiRequest {
        ApiRequest {
            method: Method::Get,
            url: format!("{}?id=eq.{}&select=*", self.config.rest_url(table), id),
            bearer,
            body: None,
            prefer: None,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BackendError> {
        self.transport.send(request).await
    }

    /// Exchange the refresh token for a new session
    async fn refresh(&self, stored: &StoredSession) -> Result<StoredSession, BackendError> {
        let response = self
            .execute(self.refresh_request(&stored.refresh_token))
            .await?
            .error_for_status()?;
        let tokens: TokenResponse = response.json()?;
        let refreshed = tokens.into_session(session::now_secs());
        self.store_session(&refreshed);
        Ok(refreshed)
    }
}

#[async_trait(?Send)]
impl BackendClient for SupabaseClient {
    async fn current_user(&self) -> Result<Option<Account>, BackendError> {
        let Some(mut stored) = self.stored_session() else {
            return Ok(None);
        };

        if stored.is_expired(session::now_secs()) {
            if !stored.can_refresh() {
                self.clear_session();
                return Ok(None);
            }
            stored = match self.refresh(&stored).await {
                Ok(refreshed) => refreshed,
                Err(e) => {
                    leptos::logging::warn!("Session refresh failed: {}", e);
                    self.clear_session();
                    return Ok(None);
                }
            };
        }

        let response = self.execute(self.user_request(&stored.access_token)).await?;
        match response.error_for_status() {
            Ok(response) => {
                let account: Account = response.json()?;
                stored.user = Some(account.clone());
                self.store_session(&stored);
                Ok(Some(account))
            }
            Err(e) if e.is_unauthorized() => {
                self.clear_session();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, BackendError> {
        let response = self
            .execute(self.sign_up_request(email, password))
            .await?
            .error_for_status()?;

        let (signed_up, stored) = parse_sign_up(&response.body, session::now_secs())?;
        if let Some(stored) = stored {
            self.store_session(&stored);
        }
        Ok(signed_up)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Account, BackendError> {
        let response = self
            .execute(self.password_grant_request(email, password))
            .await?
            .error_for_status()?;

        let tokens: TokenResponse = response.json()?;
        let stored = tokens.into_session(session::now_secs());
        let account = stored
            .user
            .clone()
            .ok_or_else(|| BackendError::Decode("Token response without user".to_string()))?;
        self.store_session(&stored);
        Ok(account)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let Some(stored) = self.stored_session() else {
            return Ok(());
        };

        let result = self
            .execute(self.logout_request(&stored.access_token))
            .await
            .and_then(ApiResponse::error_for_status);

        // Clear local state regardless of API call result
        self.clear_session();
        result.map(|_| ())
    }

    async fn insert_row(&self, table: &str, record: serde_json::Value) -> Result<(), BackendError> {
        let request = self.insert_request(table, record, self.rest_bearer());
        self.execute(request).await?.error_for_status()?;
        Ok(())
    }

    async fn select_row(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, BackendError> {
        let request = self.select_request(table, id, self.rest_bearer());
        let response = self.execute(request).await?.error_for_status()?;
        let rows: Vec<serde_json::Value> = response.json()?;
        Ok(rows.into_iter().next())
    }
}
