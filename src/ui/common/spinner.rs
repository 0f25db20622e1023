use leptos::prelude::*;

/// Centered loading placeholder with a label
#[component]
pub fn LoadingSpinner(
    /// Text shown next to the spinner
    #[prop(default = "Cargando...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-3 mt-10" aria-busy="true">
            <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-blue-600"></div>
            <p class="text-center">{label}</p>
        </div>
    }
}
