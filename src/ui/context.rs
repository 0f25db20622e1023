//! Backend context
//!
//! The backend client is provided once at the root of the component tree and
//! read by the pages, so the pages never reach for a global client.

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::{BackendClient, BackendConfig, SupabaseClient, UnconfiguredBackend};

/// Shared handle to the injected backend
#[derive(Clone)]
pub struct BackendContext {
    client: Arc<dyn BackendClient>,
}

impl BackendContext {
    pub fn new(client: Arc<dyn BackendClient>) -> Self {
        Self { client }
    }

    /// Client built from the configuration baked into this build.
    ///
    /// Falls back to [`UnconfiguredBackend`] so the pages still render and
    /// report the configuration problem on use.
    pub fn from_build_env() -> Self {
        match BackendConfig::from_build_env() {
            Ok(config) => Self::new(Arc::new(SupabaseClient::new(config))),
            Err(e) => {
                leptos::logging::error!("Backend is not configured: {}", e);
                Self::new(Arc::new(UnconfiguredBackend::new(e)))
            }
        }
    }

    pub fn client(&self) -> Arc<dyn BackendClient> {
        Arc::clone(&self.client)
    }
}

/// Provide the backend to the component tree
pub fn provide_backend(backend: BackendContext) -> BackendContext {
    provide_context(backend.clone());
    backend
}

/// Get the backend from the component tree
pub fn use_backend() -> Arc<dyn BackendClient> {
    expect_context::<BackendContext>().client()
}
