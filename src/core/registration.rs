//! Student registration flow
//!
//! Creates the account with the auth service, then writes the matching
//! profile row. The insert only happens once sign-up returned a usable id.
//! A failed insert leaves the account in place; nothing is rolled back.

use crate::core::backend::{BackendClient, BackendError};
use crate::core::profile::{PROFILE_TABLE, ProfileRow};
use crate::core::status::StatusMessage;

/// Values entered on the registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegistrationForm {
    /// Profile row for the account created from this form
    pub fn profile_for(&self, id: impl Into<String>) -> ProfileRow {
        ProfileRow {
            id: id.into(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// How a registration attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// Account and profile row were both created
    Registered { id: String },
    /// The auth service rejected the sign-up
    AuthFailed(BackendError),
    /// Sign-up succeeded but returned no account id
    MissingId,
    /// The account exists but its profile row could not be written
    ProfileNotSaved { id: String, error: BackendError },
}

impl RegistrationOutcome {
    /// Message shown under the form
    pub fn message(&self) -> StatusMessage {
        match self {
            RegistrationOutcome::Registered { .. } => {
                StatusMessage::success("Registro exitoso. Revisa tu correo para confirmar.")
            }
            RegistrationOutcome::AuthFailed(error) => {
                StatusMessage::error(format!("Error: {}", error))
            }
            RegistrationOutcome::MissingId => {
                StatusMessage::warning("No se pudo obtener el ID del usuario.")
            }
            RegistrationOutcome::ProfileNotSaved { error, .. } => StatusMessage::warning(format!(
                "Usuario creado, pero error al guardar datos: {}",
                error
            )),
        }
    }
}

/// Register a student: sign up, then insert the profile row.
pub async fn register(backend: &dyn BackendClient, form: &RegistrationForm) -> RegistrationOutcome {
    let signed_up = match backend.sign_up(&form.email, &form.password).await {
        Ok(signed_up) => signed_up,
        Err(e) => {
            leptos::logging::warn!("Sign-up rejected for {}: {}", form.email, e);
            return RegistrationOutcome::AuthFailed(e);
        }
    };

    let Some(id) = signed_up
        .user
        .map(|account| account.id)
        .filter(|id| !id.is_empty())
    else {
        leptos::logging::warn!("Sign-up for {} returned no account id", form.email);
        return RegistrationOutcome::MissingId;
    };

    let inserted = match form.profile_for(id.as_str()).to_record() {
        Ok(record) => backend.insert_row(PROFILE_TABLE, record).await,
        Err(e) => Err(e),
    };

    match inserted {
        Ok(()) => {
            leptos::logging::log!("Registered account {}", id);
            RegistrationOutcome::Registered { id }
        }
        Err(error) => {
            leptos::logging::error!("Account {} created but profile insert failed: {}", id, error);
            RegistrationOutcome::ProfileNotSaved { id, error }
        }
    }
}
