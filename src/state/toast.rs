//! Transient notification state rendered by the `Toaster` component.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::cell::RefCell;

use leptos::prelude::*;

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

/// Visible error toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Ids of visible toasts pushed after `watermark`. Ids only grow, so
    /// the caller can remember the highest id it has already handled.
    #[must_use]
    pub fn pushed_after(&self, watermark: u64) -> Vec<u64> {
        self.toasts.iter().map(|t| t.id).filter(|id| *id > watermark).collect()
    }
}

/// Sink for user-visible, non-blocking messages.
pub trait Notifier {
    fn error(&self, text: &str);
}

impl Notifier for RwSignal<ToastState> {
    fn error(&self, text: &str) {
        self.update(|state| {
            state.push(text);
        });
    }
}

impl Notifier for RefCell<ToastState> {
    fn error(&self, text: &str) {
        self.borrow_mut().push(text);
    }
}
