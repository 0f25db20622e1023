//! Password sign-in flow

use crate::core::backend::{Account, BackendClient, BackendError};
use crate::core::status::StatusMessage;

/// How a sign-in attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn(Account),
    Failed(BackendError),
}

impl LoginOutcome {
    /// Message to show; a successful sign-in navigates away instead
    pub fn message(&self) -> Option<StatusMessage> {
        match self {
            LoginOutcome::SignedIn(_) => None,
            LoginOutcome::Failed(error) => Some(StatusMessage::error(format!("Error: {}", error))),
        }
    }
}

pub async fn sign_in(backend: &dyn BackendClient, email: &str, password: &str) -> LoginOutcome {
    match backend.sign_in_with_password(email, password).await {
        Ok(account) => {
            leptos::logging::log!("Signed in account {}", account.id);
            LoginOutcome::SignedIn(account)
        }
        Err(e) => {
            leptos::logging::warn!("Sign-in rejected for {}: {}", email, e);
            LoginOutcome::Failed(e)
        }
    }
}
