//! Hosted backend contract
//!
//! The pages never talk to the network directly: every remote call goes
//! through [`BackendClient`], which is injected into the component tree so
//! tests and alternative backends can substitute their own implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;

/// Account managed by the hosted authentication service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier; empty when the service returned no identity
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Result of a successful sign-up call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpResponse {
    pub user: Option<Account>,
}

/// Backend error types
///
/// `Display` is the bare message text so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    /// The service answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// No usable backend configuration
    #[error("{0}")]
    Unconfigured(#[from] ConfigError),
}

impl BackendError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        BackendError::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status, if the service answered
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the service rejected the credentials or token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

/// Operations the application needs from the hosted auth + table service.
///
/// Futures are `?Send`: in the browser they run on the single-threaded
/// event loop via `spawn_local`.
#[async_trait(?Send)]
pub trait BackendClient: Send + Sync {
    /// Account of the active session, if any. Has no auth side effect.
    async fn current_user(&self) -> Result<Option<Account>, BackendError>;

    /// Create an account. The service may send a confirmation email.
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, BackendError>;

    /// Start a session with email and password.
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> Result<Account, BackendError>;

    /// End the active session. Local session state is cleared even on error.
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Insert a single record into `table`.
    async fn insert_row(&self, table: &str, record: serde_json::Value) -> Result<(), BackendError>;

    /// Fetch the record of `table` whose `id` column equals `id`.
    async fn select_row(
        &self,
        table: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, BackendError>;
}

/// Backend used when no valid configuration is available.
///
/// Every operation fails with the configuration error.
#[derive(Debug, Clone)]
pub struct UnconfiguredBackend {
    error: ConfigError,
}

impl UnconfiguredBackend {
    pub fn new(error: ConfigError) -> Self {
        Self { error }
    }

    fn fail<T>(&self) -> Result<T, BackendError> {
        Err(BackendError::Unconfigured(self.error.clone()))
    }
}

#[async_trait(?Send)]
impl BackendClient for UnconfiguredBackend {
    async fn current_user(&self) -> Result<Option<Account>, BackendError> {
        self.fail()
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<SignUpResponse, BackendError> {
        self.fail()
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Account, BackendError> {
        self.fail()
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        self.fail()
    }

    async fn insert_row(
        &self,
        _table: &str,
        _record: serde_json::Value,
    ) -> Result<(), BackendError> {
        self.fail()
    }

    async fn select_row(
        &self,
        _table: &str,
        _id: &str,
    ) -> Result<Option<serde_json::Value>, BackendError> {
        self.fail()
    }
}
