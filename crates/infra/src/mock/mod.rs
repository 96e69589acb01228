//! In-memory backend serving every gateway.
//!
//! Responses come from seeded fixtures, delayed by a [`Latency`] class per
//! operation. Mutations persist in the [`MockStore`] for the lifetime of the
//! backend, and [`MockBackend::fail_next`] scripts network failures.

mod admin;
mod alerts;
mod auctions;
mod catalog;
mod failure;
pub mod fixtures;
mod latency;
mod messaging;
mod notifications;
mod orders;
mod rewards;
mod session;
mod shop;
mod social;
mod store;
mod subscriptions;

use chrono::Utc;
use marketfeed_domain::{BackendConfig, MarketError, Result};
use parking_lot::Mutex;
use tracing::{debug, warn};

pub use failure::FailureInjector;
pub use latency::{Latency, LatencyClass};
pub use store::{MockStore, ShopState};

/// Mock implementation of [`marketfeed_core::MarketBackend`]
#[derive(Debug)]
pub struct MockBackend {
    store: Mutex<MockStore>,
    latency: Latency,
    failures: FailureInjector,
}

impl MockBackend {
    pub fn new(latency: Latency) -> Self {
        Self {
            store: Mutex::new(MockStore::seeded(Utc::now())),
            latency,
            failures: FailureInjector::new(),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(Latency::from_config(config))
    }

    /// Backend that answers without any delay
    pub fn instant() -> Self {
        Self::new(Latency::disabled())
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    /// Make the next call of `operation` fail with a network error
    pub fn fail_next(&self, operation: impl Into<String>) {
        self.failures.fail_next(operation);
    }

    /// Simulate the round trip: log, sleep, then maybe fail
    async fn respond(&self, operation: &'static str, class: LatencyClass) -> Result<()> {
        debug!(operation, "mock_call");
        self.latency.wait(class).await;
        if self.failures.take(operation) {
            warn!(operation, "mock_call_failed");
            return Err(MarketError::Network(format!("{operation}: simulated network failure")));
        }
        Ok(())
    }

    /// Run `f` against the store; the lock is never held across an await
    fn with_store<R>(&self, f: impl FnOnce(&mut MockStore) -> R) -> R {
        f(&mut self.store.lock())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(Latency::default())
    }
}
