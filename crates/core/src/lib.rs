//! # MarketFeed Core
//!
//! Client-side business logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Gateway ports: the backend surface every page talks to
//! - Session-scoped state containers (cart, auth, toasts)
//! - Page services and view models: guards, form validation, optimistic
//!   updates and local state replacement after successful calls
//!
//! ## Architecture Principles
//! - Only depends on `marketfeed-domain` and `marketfeed-common`
//! - No I/O; all backend access goes through the gateway traits
//! - Pure, testable logic

pub mod admin;
pub mod alerts;
pub mod auctions;
pub mod backend;
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
pub mod ui;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use admin::ports::AdminGateway;
pub use admin::AdminConsole;
pub use alerts::ports::StockAlertGateway;
pub use alerts::StockAlertService;
pub use auctions::ports::AuctionGateway;
pub use auctions::AuctionService;
pub use backend::{Gateways, MarketBackend};
pub use cart::{CartLineSelector, CartStore};
pub use catalog::ports::CatalogGateway;
pub use catalog::{CatalogService, Showcase};
pub use messaging::ports::MessagingGateway;
pub use messaging::ConversationView;
pub use notifications::ports::NotificationGateway;
pub use notifications::NotificationCenter;
pub use orders::ports::OrderGateway;
pub use orders::{CheckoutService, OrderService};
pub use rewards::ports::RewardsGateway;
pub use rewards::{RewardsDashboard, RewardsService};
pub use session::ports::SessionGateway;
pub use session::{AuthService, AuthStore};
pub use shop::ports::ShopGateway;
pub use shop::ShopDashboard;
pub use social::ports::SocialGateway;
pub use social::{EngagementState, FeedService, FollowToggle, PostEngagement};
pub use subscriptions::ports::SubscriptionGateway;
pub use subscriptions::{SubscriptionOverview, SubscriptionService};
pub use ui::{CounterAnimation, Toast, ToastQueue};
