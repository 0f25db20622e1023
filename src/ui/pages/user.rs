//! User home page
//!
//! Shows the signed-in student's profile row. Visitors without a session are
//! sent to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::{
    Account, BackendError, LOGIN_ROUTE, ProfileRow, StatusMessage, SubmitLock, fetch_profile,
};
use crate::ui::common::{LoadingSpinner, StatusBanner};
use crate::ui::context::use_backend;

#[derive(Debug, Clone, PartialEq)]
enum UserView {
    Loading,
    Loaded {
        account: Account,
        profile: Result<Option<ProfileRow>, BackendError>,
    },
}

/// User home page component
#[component]
pub fn UserPage() -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();

    let state = RwSignal::new(UserView::Loading);
    let signing_out = SubmitLock::new();

    {
        let backend = backend.clone();
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let backend = backend.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let account = match backend.current_user().await {
                    Ok(Some(account)) => account,
                    Ok(None) => {
                        navigate(LOGIN_ROUTE, Default::default());
                        return;
                    }
                    Err(e) => {
                        leptos::logging::warn!("Could not load current user: {}", e);
                        navigate(LOGIN_ROUTE, Default::default());
                        return;
                    }
                };
                let profile = fetch_profile(backend.as_ref(), &account.id).await;
                state.set(UserView::Loaded { account, profile });
            });
        });
    }

    let on_sign_out = {
        let signing_out = signing_out.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(guard) = signing_out.try_begin() else {
                return;
            };

            let backend = backend.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                if let Err(e) = backend.sign_out().await {
                    leptos::logging::warn!("Sign-out request failed: {}", e);
                }
                drop(guard);
                navigate(LOGIN_ROUTE, Default::default());
            });
        }
    };

    view! {
        {move || match state.get() {
            UserView::Loading => view! { <LoadingSpinner /> }.into_any(),
            UserView::Loaded { account, profile } => {
                let on_sign_out = on_sign_out.clone();
                let signing_out = signing_out.clone();
                let notice = match &profile {
                    Ok(Some(_)) => None,
                    Ok(None) => Some(StatusMessage::warning(
                        "Tu cuenta existe, pero tus datos de estudiante no se guardaron.",
                    )),
                    Err(e) => Some(StatusMessage::error(format!("Error: {}", e))),
                };
                let profile = profile.ok().flatten();
                let heading = profile
                    .as_ref()
                    .map(|p| format!("Hola, {}", p.name))
                    .unwrap_or_else(|| "Mi cuenta".to_string());
                let email = profile
                    .as_ref()
                    .map(|p| p.email.clone())
                    .or(account.email)
                    .unwrap_or_default();
                let phone_row = profile.map(|p| {
                    let phone = if p.phone.is_empty() { "-".to_string() } else { p.phone };
                    view! {
                        <div class="flex justify-between">
                            <dt class="text-gray-500">"Teléfono"</dt>
                            <dd>{phone}</dd>
                        </div>
                    }
                });

                view! {
                    <div class="flex items-center justify-center min-h-screen bg-gray-50 p-4">
                        <div class="w-full max-w-md bg-white border border-gray-300 rounded-lg shadow-md p-6">
                            <h1 class="text-xl font-bold text-center mb-6">{heading}</h1>

                            <dl class="space-y-2 text-sm">
                                <div class="flex justify-between">
                                    <dt class="text-gray-500">"Correo"</dt>
                                    <dd>{email}</dd>
                                </div>
                                {phone_row}
                            </dl>

                            <StatusBanner message=Signal::derive(move || notice.clone()) />

                            <button
                                type="button"
                                class="mt-6 w-full border border-gray-300 py-2 rounded hover:bg-gray-100
                                       disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=move || signing_out.is_busy()
                                on:click=on_sign_out
                            >
                                "Cerrar sesión"
                            </button>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
