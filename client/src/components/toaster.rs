//! Transient notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can raise a toast through [`notify`] with the
//! `RwSignal<ToastState>` provided by `App`. Toasts expire on their own in
//! the browser and can be dismissed by clicking them.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

/// Queue a toast and schedule its expiry.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders the queued toasts in a polite live region.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
