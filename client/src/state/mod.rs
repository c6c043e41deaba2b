//! Page-local UI state.
//!
//! DESIGN
//! ======
//! Plain structs wrapped in `RwSignal`s by the components that own them, so
//! transitions stay testable without a reactive runtime.

pub mod signup;
pub mod toast;
