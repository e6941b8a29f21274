//! Product description editor.
//!
//! The description is stored as markup, so pasted HTML from an external
//! rich-text tool is kept as-is.

use leptos::prelude::*;

#[component]
pub fn DescriptionEditor(
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-field mb-3">
            <textarea
                class="description-editor w-100"
                name="description"
                rows="8"
                placeholder="Add Description"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            ></textarea>
            <div class="error text-danger">{move || error.get().unwrap_or_default()}</div>
        </div>
    }
}
