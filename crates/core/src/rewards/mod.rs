//! Loyalty programme and virtual coins

pub mod ports;
mod service;

pub use service::{RewardsDashboard, RewardsService};
