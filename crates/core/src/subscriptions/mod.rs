//! Paid subscription plans

pub mod ports;
mod service;

pub use service::{SubscriptionOverview, SubscriptionService};
