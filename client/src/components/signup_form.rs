//! Email capture form for launch updates.
//!
//! Validation failures surface as error toasts. A valid address disables the
//! button for [`SUBMIT_DELAY_MS`], then the field clears and a success toast
//! appears. The address is not sent anywhere.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::content;
use crate::state::signup::{SignupError, SignupState};
#[cfg(feature = "hydrate")]
use crate::state::signup::SUBMIT_DELAY_MS;
use crate::state::toast::{ToastKind, ToastState};

/// Validate the field and enter `Submitting`.
///
/// Returns `true` when the caller should start the acknowledgment timer.
/// User-facing validation failures are queued as error toasts; a repeat
/// submit while one is pending is dropped silently.
pub fn submit(signup: RwSignal<SignupState>, toasts: RwSignal<ToastState>) -> bool {
    let outcome = signup
        .try_update(SignupState::begin_submit)
        .unwrap_or(Err(SignupError::InFlight));

    match outcome {
        Ok(_) => true,
        Err(err) => {
            if err.is_user_facing() {
                notify(toasts, ToastKind::Error, err.to_string());
            }
            false
        }
    }
}

/// Finish a pending submission: clear the field and queue the success toast.
pub fn acknowledge(signup: RwSignal<SignupState>, toasts: RwSignal<ToastState>) {
    if let Some(message) = signup.try_update(SignupState::finish_submit) {
        notify(toasts, ToastKind::Success, message);
    }
}

#[component]
pub fn SignupForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let signup = RwSignal::new(SignupState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit(signup, toasts) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            acknowledge(signup, toasts);
        });
    };

    view! {
        <form class="signup-form" on:submit=on_submit aria-label="Email sign up for launch updates">
            <div class="signup-form__row">
                <input
                    class="signup-form__input"
                    type="email"
                    inputmode="email"
                    autocomplete="email"
                    placeholder=content::EMAIL_PLACEHOLDER
                    aria-label="Email address"
                    required=true
                    prop:value=move || signup.with(|s| s.email.clone())
                    on:input=move |ev| signup.update(|s| s.set_email(event_target_value(&ev)))
                />
                <button
                    class="signup-form__button"
                    type="submit"
                    disabled=move || signup.with(SignupState::is_submitting)
                >
                    {move || signup.with(SignupState::button_label)}
                </button>
            </div>
            <p class="signup-form__note">{content::NO_SPAM_NOTE}</p>
        </form>
    }
}
