//! Backend access and the registration, sign-in and profile flows

pub mod backend;
pub mod config;
mod guard;
mod login;
#[cfg(test)]
mod mock;
mod profile;
mod registration;
mod routes;
pub mod session;
mod status;
mod submit;
pub mod supabase;
#[cfg(test)]
mod tests;

pub use backend::{Account, BackendClient, BackendError, SignUpResponse, UnconfiguredBackend};
pub use config::{BackendConfig, ConfigError};
pub use guard::{SessionCheck, check_session};
pub use login::{LoginOutcome, sign_in};
pub use profile::{PROFILE_TABLE, ProfileRow, fetch_profile};
pub use registration::{RegistrationForm, RegistrationOutcome, register};
pub use routes::*;
pub use status::{MessageKind, StatusMessage};
pub use submit::{SubmitGuard, SubmitLock};
pub use supabase::SupabaseClient;
