//! Reusable UI components.

pub mod signup_form;
pub mod toaster;
