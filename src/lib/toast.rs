//! Queue of transient notifications. Rendering and timers live in the
//! `Toaster` component; this type only tracks what is on screen.

use super::outcome::{Outcome, OutcomeKind};

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: OutcomeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Appends a toast and returns its id. Ids are never reused.
    pub fn push(&mut self, outcome: Outcome) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind: outcome.kind,
            message: outcome.message,
        });
        id
    }

    /// Removes the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}
