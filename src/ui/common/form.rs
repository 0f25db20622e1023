use leptos::prelude::*;

/// Controlled input bound to a string signal
#[component]
pub fn FormField(
    /// Input type (text, email, tel, password)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Input name, also used as element id
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Native required validation
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            id=name
            name=name
            placeholder=placeholder
            autocomplete=autocomplete
            required=required
            class="w-full px-4 py-2 border border-gray-300 rounded
                   focus:outline-none focus:ring-2 focus:ring-blue-500"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
