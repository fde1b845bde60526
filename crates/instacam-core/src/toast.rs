#![forbid(unsafe_code)]

//! Transient toast notifications.
//!
//! Toasts are the only user-visible feedback channel: they confirm actions
//! ("Saved to bookmarks", "Found N posts..."). Each toast lives for a fixed
//! number of ticks and is dropped by [`ToastQueue::tick`].

/// How many 100 ms ticks a toast stays visible (3 seconds).
pub const TOAST_TTL_TICKS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    remaining_ticks: u32,
}

/// FIFO queue of live toasts.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(%text, "toast");
        self.toasts.push(Toast {
            text,
            remaining_ticks: TOAST_TTL_TICKS,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Age every toast by one tick, dropping the expired ones.
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
        }
        self.toasts.retain(|t| t.remaining_ticks > 0);
    }
}
