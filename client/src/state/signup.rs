//! Waitlist signup form state.
//!
//! DESIGN
//! ======
//! Two phases, `Idle` and `Submitting`. Submission is acknowledged locally
//! after a fixed delay; nothing leaves the browser. The page component owns
//! the timer and drives [`SignupState::begin_submit`] and
//! [`SignupState::finish_submit`].

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::sync::LazyLock;

use regex::Regex;

/// Simulated acknowledgment delay.
pub const SUBMIT_DELAY_MS: u32 = 800;

pub const SUCCESS_MESSAGE: &str = "Thanks! We'll keep you posted.";

// Searched, not anchored: any `x@y.z` run inside the input passes.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^@\s]+@[^@\s]+\.[^@\s]+").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Please enter a valid email address.")]
    Empty,
    #[error("That email looks invalid.")]
    Malformed,
    #[error("a submission is already in progress")]
    InFlight,
}

impl SignupError {
    /// Whether the error should be shown to the user as a notification.
    #[must_use]
    pub fn is_user_facing(self) -> bool {
        !matches!(self, Self::InFlight)
    }
}

/// Loose address check used by the form.
#[must_use]
pub fn looks_like_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupState {
    pub email: String,
    pub phase: SignupPhase,
}

impl SignupState {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SignupPhase::Submitting
    }

    /// Validate the current input and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the phase is left unchanged.
    pub fn begin_submit(&mut self) -> Result<String, SignupError> {
        if self.is_submitting() {
            return Err(SignupError::InFlight);
        }
        if self.email.is_empty() {
            return Err(SignupError::Empty);
        }
        if !looks_like_email(&self.email) {
            return Err(SignupError::Malformed);
        }
        self.phase = SignupPhase::Submitting;
        Ok(self.email.clone())
    }

    /// Complete the simulated submission: clear the field and return to `Idle`.
    pub fn finish_submit(&mut self) -> &'static str {
        self.email.clear();
        self.phase = SignupPhase::Idle;
        SUCCESS_MESSAGE
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() { "Submitting..." } else { "Notify Me" }
    }
}
