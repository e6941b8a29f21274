//! Labelled text input with an error line underneath.

use leptos::prelude::*;

/// Floating-label input used for the scalar product fields.
#[component]
pub fn CustomInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let id = format!("field-{name}");

    view! {
        <div class="form-field">
            <div class="form-floating">
                <input
                    id=id.clone()
                    class="form-control"
                    class:form-control--invalid=move || error.get().is_some()
                    type=input_type
                    name=name
                    placeholder=label.clone()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| on_blur.run(())
                />
                <label for=id>{label}</label>
            </div>
            <div class="error text-danger">{move || error.get().unwrap_or_default()}</div>
        </div>
    }
}
