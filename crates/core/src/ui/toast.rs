//! Toast notification queue

use std::time::{Duration, Instant};

use marketfeed_domain::ToastKind;
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub duration: Duration,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

#[derive(Debug, Default)]
struct QueueState {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Toasts currently on screen, oldest first
#[derive(Debug)]
pub struct ToastQueue {
    default_duration: Duration,
    state: Mutex<QueueState>,
}

impl ToastQueue {
    pub fn new(default_duration: Duration) -> Self {
        Self { default_duration, state: Mutex::new(QueueState::default()) }
    }

    /// Show a toast; returns its id
    pub fn push(&self, kind: ToastKind, message: impl Into<String>, duration: Duration) -> u64 {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            duration,
            shown_at: Instant::now(),
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message, self.default_duration)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message, self.default_duration)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Warning, message, self.default_duration)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message, self.default_duration)
    }

    /// Remove a toast; `false` if it was already gone
    pub fn dismiss(&self, id: u64) -> bool {
        let mut state = self.state.lock();
        let before = state.toasts.len();
        state.toasts.retain(|t| t.id != id);
        state.toasts.len() != before
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.state.lock().toasts.clone()
    }

    /// Drop toasts whose duration has elapsed at `now`; returns how many
    pub fn expire(&self, now: Instant) -> usize {
        let mut state = self.state.lock();
        let before = state.toasts.len();
        state.toasts.retain(|t| !t.is_expired(now));
        before - state.toasts.len()
    }

    pub fn latest(&self) -> Option<Toast> {
        self.state.lock().toasts.last().cloned()
    }
}
