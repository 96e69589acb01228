//! The full backend surface as one bundle of gateway handles

use std::sync::Arc;

use crate::{
    AdminGateway, AuctionGateway, CatalogGateway, MessagingGateway, NotificationGateway,
    OrderGateway, RewardsGateway, SessionGateway, ShopGateway, SocialGateway,
    StockAlertGateway, SubscriptionGateway,
};

/// A backend that serves every page of the client
pub trait MarketBackend:
    SessionGateway
    + CatalogGateway
    + SocialGateway
    + OrderGateway
    + ShopGateway
    + AdminGateway
    + AuctionGateway
    + RewardsGateway
    + StockAlertGateway
    + SubscriptionGateway
    + NotificationGateway
    + MessagingGateway
{
}

impl<T> MarketBackend for T where
    T: SessionGateway
        + CatalogGateway
        + SocialGateway
        + OrderGateway
        + ShopGateway
        + AdminGateway
        + AuctionGateway
        + RewardsGateway
        + StockAlertGateway
        + SubscriptionGateway
        + NotificationGateway
        + MessagingGateway
{
}

/// One handle per gateway.
///
/// Services only see the gateway they need, so a test can swap a single
/// area for a fake while the rest stay on the real backend.
#[derive(Clone)]
pub struct Gateways {
    pub session: Arc<dyn SessionGateway>,
    pub catalog: Arc<dyn CatalogGateway>,
    pub social: Arc<dyn SocialGateway>,
    pub orders: Arc<dyn OrderGateway>,
    pub shop: Arc<dyn ShopGateway>,
    pub admin: Arc<dyn AdminGateway>,
    pub auctions: Arc<dyn AuctionGateway>,
    pub rewards: Arc<dyn RewardsGateway>,
    pub alerts: Arc<dyn StockAlertGateway>,
    pub subscriptions: Arc<dyn SubscriptionGateway>,
    pub notifications: Arc<dyn NotificationGateway>,
    pub messaging: Arc<dyn MessagingGateway>,
}

impl Gateways {
    /// Route every area to the same backend
    pub fn from_backend<B: MarketBackend + 'static>(backend: Arc<B>) -> Self {
        Self {
            session: backend.clone(),
            catalog: backend.clone(),
            social: backend.clone(),
            orders: backend.clone(),
            shop: backend.clone(),
            admin: backend.clone(),
            auctions: backend.clone(),
            rewards: backend.clone(),
            alerts: backend.clone(),
            subscriptions: backend.clone(),
            notifications: backend.clone(),
            messaging: backend,
        }
    }
}
