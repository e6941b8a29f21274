//! Toast notifications rendered in the page corner.

use leptos::prelude::*;

use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

/// Renders queued toasts; each one dismisses itself after a few seconds.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    #[cfg(feature = "hydrate")]
                    {
                        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
                            toasts.update(|t| t.dismiss(id));
                        })
                        .forget();
                    }
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier()) role="status">
                            <span class="toast__text">{toast.text}</span>
                            <button
                                type="button"
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
