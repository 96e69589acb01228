//! Commands - what a UI shell invokes for each page action
//!
//! Every command runs through [`crate::utils::execute_command`], so failures
//! are logged with a stable label and surface as error toasts.

pub mod admin;
pub mod alerts;
pub mod auctions;
pub mod cart;
pub mod catalog;
pub mod messaging;
pub mod notifications;
pub mod orders;
pub mod rewards;
pub mod session;
pub mod shop;
pub mod social;
pub mod subscriptions;
pub mod toasts;
