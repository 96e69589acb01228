//! Artificial response delays

use std::time::Duration;

use marketfeed_domain::BackendConfig;

/// How long a kind of call takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyClass {
    Standard,
    /// Like, follow, mark-as-read
    Quick,
    /// Comment, send message
    Messaging,
    Checkout,
    Coin,
}

/// Per-class delays applied before every mock response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
    standard: Duration,
    quick: Duration,
    messaging: Duration,
    checkout: Duration,
    coin: Duration,
}

impl Latency {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            enabled: config.latency_enabled,
            standard: Duration::from_millis(config.standard_latency_ms),
            quick: Duration::from_millis(config.quick_latency_ms),
            messaging: Duration::from_millis(config.messaging_latency_ms),
            checkout: Duration::from_millis(config.checkout_latency_ms),
            coin: Duration::from_millis(config.coin_latency_ms),
        }
    }

    /// Respond immediately
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn duration(&self, class: LatencyClass) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        match class {
            LatencyClass::Standard => self.standard,
            LatencyClass::Quick => self.quick,
            LatencyClass::Messaging => self.messaging,
            LatencyClass::Checkout => self.checkout,
            LatencyClass::Coin => self.coin,
        }
    }

    pub async fn wait(&self, class: LatencyClass) {
        let delay = self.duration(class);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_config(&BackendConfig::default())
    }
}
