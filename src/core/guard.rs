//! Mount-time session check shared by the public pages

use crate::core::backend::{Account, BackendClient};
use crate::core::routes::USER_ROUTE;

/// State of the "is someone already signed in?" check
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionCheck {
    /// Waiting for the backend; a placeholder is shown
    #[default]
    Checking,
    /// A user is signed in and the page is navigating away
    Redirecting(Account),
    /// Nobody is signed in; the page content can be shown
    Ready,
}

impl SessionCheck {
    /// Where to navigate once the check resolved, if anywhere
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            SessionCheck::Redirecting(_) => Some(USER_ROUTE),
            _ => None,
        }
    }

    /// Whether the page may render its form
    pub fn shows_content(&self) -> bool {
        matches!(self, SessionCheck::Ready)
    }
}

/// Ask the backend for the current user and decide what the page shows.
///
/// A failed check counts as "nobody signed in" so the page stays usable.
pub async fn check_session(backend: &dyn BackendClient) -> SessionCheck {
    match backend.current_user().await {
        Ok(Some(account)) => SessionCheck::Redirecting(account),
        Ok(None) => SessionCheck::Ready,
        Err(e) => {
            leptos::logging::warn!("Session check failed: {}", e);
            SessionCheck::Ready
        }
    }
}
