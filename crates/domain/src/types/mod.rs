//! Domain types and models
//!
//! Flat DTOs exchanged with the backend, grouped by feature area.

pub mod admin;
pub mod alerts;
pub mod auction;
pub mod catalog;
pub mod commerce;
pub mod messaging;
pub mod money;
pub mod notification;
pub mod rewards;
pub mod session;
pub mod shop;
pub mod social;
pub mod subscription;
pub mod ui;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

pub use admin::AdminUser;
pub use alerts::{AlertStatus, StockAlert};
pub use auction::{Auction, AuctionDetail, Bid};
pub use catalog::{
    Brand, Category, MasterProduct, MasterProductDraft, MasterProductPatch, Product,
    ProductDetail, ProductFilter, ProductVariation, RelatedProduct, Review, SellerOffer,
};
pub use commerce::{
    CartItem, CartLineKey, Order, OrderConfirmation, OrderItem, OrderRequest, OrderStatus,
    ReturnRequest, ReturnStatus, ReturnTicket, ShippingInfo,
};
pub use messaging::{Conversation, Message};
pub use money::Money;
pub use notification::{Notification, NotificationKind};
pub use rewards::{CoinBalance, LoyaltyStatus, LoyaltyTier, ShopLoyalty};
pub use session::{
    LoginRequest, ProfileUpdate, RegisterRequest, RegisterResponse, Session, User, UserRole,
};
pub use shop::{
    ShopInfo, ShopOrder, ShopOrderItem, ShopProduct, ShopProductDraft, ShopProductPatch,
    ShopStatus, ShopSummary,
};
pub use social::{NewPost, Post, PostProduct};
pub use subscription::{SubscriptionPlan, SubscriptionStatus, UserSubscription};
pub use ui::ToastKind;

/// Plain acknowledgement returned by mutations that have no payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
