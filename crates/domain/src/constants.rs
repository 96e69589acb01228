//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Mock backend latency classes (milliseconds)
pub const STANDARD_LATENCY_MS: u64 = 500;
pub const QUICK_LATENCY_MS: u64 = 200;
pub const MESSAGING_LATENCY_MS: u64 = 300;
pub const CHECKOUT_LATENCY_MS: u64 = 1000;
pub const COIN_LATENCY_MS: u64 = 300;

// Session / UI
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
pub const MAX_POST_CHARS: usize = 280;
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

// Mock session
pub const MOCK_TOKEN: &str = "mock-jwt-token";
pub const MOCK_USERNAME: &str = "MockUser";
pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";
pub const DEMO_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEMO_ADMIN_PASSWORD: &str = "admin";
pub const DEMO_SHOP_ID: &str = "shop1";
