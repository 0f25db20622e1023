//! Status message shown under a form

use leptos::prelude::*;

use crate::core::StatusMessage;

/// Renders the message when `Some`; color follows the message kind
#[component]
pub fn StatusBanner(
    #[prop(into)]
    message: Signal<Option<StatusMessage>>,
) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <p
                    class=format!("mt-4 text-center text-sm {}", message.kind.class())
                    role="status"
                >
                    {message.text}
                </p>
            }
        })
    }
}
