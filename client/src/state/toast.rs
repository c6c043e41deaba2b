//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Toasts are appended with increasing ids and removed either explicitly or
//! by the `Toaster` component's expiry timer. The queue is capped so a burst
//! of validation errors cannot stack up on screen; the oldest entry goes first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible.
pub const TOAST_TTL_MS: u32 = 4000;

pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    /// Remove a toast. Unknown ids (already evicted) are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
