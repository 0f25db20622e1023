//! Student registration page
//!
//! Redirects signed-in users to their home, otherwise shows the sign-up form.
//! Submitting creates the account and then the profile row; the outcome is
//! shown under the form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::{
    RegistrationForm, SessionCheck, StatusMessage, SubmitLock, check_session, follow_login_link,
    register,
};
use crate::ui::common::{FormField, LoadingSpinner, StatusBanner};
use crate::ui::context::use_backend;

/// Registration page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let session = RwSignal::new(SessionCheck::Checking);
    let message = RwSignal::new(None::<StatusMessage>);
    let lock = SubmitLock::new();

    // Session check runs once, client-side only
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
        let lock = lock.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            // Ignore resubmits while an attempt is in flight
            let Some(guard) = lock.try_begin() else {
                return;
            };
            message.set(None);

            let form = RegistrationForm {
                name: name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                password: password.get_untracked(),
            };
            let backend = backend.clone();

            spawn_local(async move {
                let outcome = register(backend.as_ref(), &form).await;
                message.set(Some(outcome.message()));
                drop(guard);
            });
        }
    };

    let on_login_click = move |_: leptos::ev::MouseEvent| {
        follow_login_link(|path| navigate(path, Default::default()));
    };

    view! {
        {move || {
            if !session.get().shows_content() {
                return view! { <LoadingSpinner label="Verificando sesión..." /> }.into_any();
            }

            let on_submit = on_submit.clone();
            let on_login_click = on_login_click.clone();
            let busy = lock.clone();
            let label_busy = lock.clone();
            view! {
                <div class="flex items-center justify-center min-h-screen bg-gray-50 p-4">
                    <div class="w-full max-w-md bg-white border border-gray-300 rounded-lg shadow-md p-6">
                        <h1 class="text-xl font-bold text-center mb-6">"Registro de estudiante"</h1>

                        <form on:submit=on_submit class="space-y-4">
                            <FormField
                                name="nombre"
                                placeholder="Nombre completo"
                                autocomplete="name"
                                required=true
                                value=name
                                on_input=Callback::new(move |v| name.set(v))
                            />
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
                                input_type="tel"
                                name="telefono"
                                placeholder="Teléfono"
                                autocomplete="tel"
                                value=phone
                                on_input=Callback::new(move |v| phone.set(v))
                            />
                            <FormField
                                input_type="password"
                                name="password"
                                placeholder="Contraseña"
                                autocomplete="new-password"
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
                                {move || if label_busy.is_busy() { "Registrando..." } else { "Registrarse" }}
                            </button>
                        </form>

                        <StatusBanner message=message />

                        <p class="mt-4 text-center text-sm">
                            "¿Ya tienes cuenta? "
                            <button
                                type="button"
                                class="text-blue-600 underline hover:text-blue-800"
                                on:click=on_login_click
                            >
                                "Inicia sesión aquí"
                            </button>
                        </p>
                    </div>
                </div>
            }.into_any()
        }}
    }
}
