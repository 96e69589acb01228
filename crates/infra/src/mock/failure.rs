//! Scripted network failures

use std::collections::HashMap;

use parking_lot::Mutex;

/// Counts pending failures per operation name
#[derive(Debug, Default)]
pub struct FailureInjector {
    pending: Mutex<HashMap<String, u32>>,
}

impl FailureInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one failure for the next call of `operation`
    pub fn fail_next(&self, operation: impl Into<String>) {
        *self.pending.lock().entry(operation.into()).or_insert(0) += 1;
    }

    /// Consume a queued failure, if any
    pub fn take(&self, operation: &str) -> bool {
        let mut pending = self.pending.lock();
        match pending.get_mut(operation) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                pending.remove(operation);
                true
            }
            None => false,
        }
    }
}
