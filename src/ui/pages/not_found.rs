//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{LOGIN_ROUTE, REGISTER_ROUTE};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Página no encontrada"</h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "La página que buscas no existe o fue movida."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=REGISTER_ROUTE
                        attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition-colors"
                    >
                        "Registrarse"
                    </A>
                    <A
                        href=LOGIN_ROUTE
                        attr:class="px-6 py-3 border border-gray-300 hover:bg-gray-100 font-medium rounded-lg transition-colors"
                    >
                        "Iniciar sesión"
                    </A>
                </div>
            </div>
        </div>
    }
}
