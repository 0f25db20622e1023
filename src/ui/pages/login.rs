//! Login page component
//!
//! A standalone page for password sign-in, redirects to the user home on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::{
    LoginOutcome, SessionCheck, StatusMessage, SubmitLock, USER_ROUTE, check_session,
    follow_register_link, sign_in,
};
use crate::ui::common::{FormField, LoadingSpinner, StatusBanner};
use crate::ui::context::use_backend;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let session = RwSignal::new(SessionCheck::Checking);
    let message = RwSignal::new(None::<StatusMessage>);
    let lock = SubmitLock::new();

    // Redirect if already authenticated
    {
        let backend = backend.clone();
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let backend = backend.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let check = check_session(backend.as_ref()).await;
                if let Some(target) = check.redirect_target() {
                    navigate(target, Default::default());
                }
                session.set(check);
            });
        });
    }

    let on_submit = {
        let backend = backend.clone();
        let navigate = navigate.clone();
        let lock = lock.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let Some(guard) = lock.try_begin() else {
                return;
            };
            message.set(None);

            let email_val = email.get_untracked();
            let password_val = password.get_untracked();
            let backend = backend.clone();
            let navigate = navigate.clone();

            spawn_local(async move {
                let outcome = sign_in(backend.as_ref(), &email_val, &password_val).await;
                drop(guard);
                match outcome {
                    LoginOutcome::SignedIn(_) => navigate(USER_ROUTE, Default::default()),
                    failed => message.set(failed.message()),
                }
            });
        }
    };

    let on_register_click = move |_: leptos::ev::MouseEvent| {
        follow_register_link(|path| navigate(path, Default::default()));
    };

    view! {
        {move || {
            if !session.get().shows_content() {
                return view! { <LoadingSpinner label="Verificando sesión..." /> }.into_any();
            }

            let on_submit = on_submit.clone();
            let on_register_click = on_register_click.clone();
            let busy = lock.clone();
            let label_busy = lock.clone();
            view! {
                <div class="flex items-center justify-center min-h-screen bg-gray-50 p-4">
                    <div class="w-full max-w-md bg-white border border-gray-300 rounded-lg shadow-md p-6">
                        <h1 class="text-xl font-bold text-center mb-6">"Iniciar sesión"</h1>

                        <form on:submit=on_submit class="space-y-4">
                            <FormField
                                input_type="email"
                                name="correo"
                                placeholder="Correo electrónico"
                                autocomplete="email"
                                required=true
                                value=email
                                on_input=Callback::new(move |v| email.set(v))
                            />
                            <FormField
                                input_type="password"
                                name="password"
                                placeholder="Contraseña"
                                autocomplete="current-password"
                                required=true
                                value=password
                                on_input=Callback::new(move |v| password.set(v))
                            />

                            <button
                                type="submit"
                                class="w-full bg-blue-600 text-white py-2 rounded hover:bg-blue-700
                                       transition duration-200 font-medium
                                       disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=move || busy.is_busy()
                            >
                                {move || if label_busy.is_busy() { "Entrando..." } else { "Entrar" }}
                            </button>
                        </form>

                        <StatusBanner message=message />

                        <p class="mt-4 text-center text-sm">
                            "¿No tienes cuenta? "
                            <button
                                type="button"
                                class="text-blue-600 underline hover:text-blue-800"
                                on:click=on_register_click
                            >
                                "Regístrate"
                            </button>
                        </p>
                    </div>
                </div>
            }.into_any()
        }}
    }
}
