//! Application context - dependency injection container

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use marketfeed_core::{
    AdminConsole, AuctionService, AuthService, AuthStore, CartStore, CatalogService,
    CheckoutService, ConversationView, FeedService, FollowToggle, Gateways, NotificationCenter,
    OrderService, PostEngagement, RewardsService, ShopDashboard, StockAlertService,
    SubscriptionService, ToastQueue,
};
use marketfeed_domain::Config;
use marketfeed_infra::MockBackend;
use tokio::sync::Mutex;

/// Application context - holds the session stores, services and page state
pub struct AppContext {
    pub config: Config,
    pub gateways: Gateways,

    // Session-scoped stores
    pub auth: Arc<AuthStore>,
    pub cart: Arc<CartStore>,
    pub toasts: Arc<ToastQueue>,

    // Stateless page services
    pub auth_service: AuthService,
    pub catalog: CatalogService,
    pub feed: FeedService,
    pub checkout: CheckoutService,
    pub orders: OrderService,
    pub auctions: AuctionService,
    pub rewards: RewardsService,
    pub alerts: StockAlertService,
    pub subscriptions: SubscriptionService,

    // View models for pages that keep local state between actions
    pub admin_console: Mutex<AdminConsole>,
    pub notifications: Mutex<NotificationCenter>,
    pub conversations: Mutex<ConversationView>,
    pub shop_dashboard: Mutex<Option<ShopDashboard>>,
    pub engagements: Mutex<HashMap<u32, Arc<PostEngagement>>>,
    pub follows: Mutex<HashMap<String, FollowToggle>>,
}

impl AppContext {
    /// Wire every service to a fresh mock backend configured from `config`
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(MockBackend::from_config(&config.backend));
        tracing::info!(
            latency_enabled = config.backend.latency_enabled,
            "mock backend ready"
        );
        Self::with_backend(Gateways::from_backend(backend), config)
    }

    /// Wire every service to an arbitrary gateway set
    pub fn with_backend(gateways: Gateways, config: Config) -> Self {
        let auth = Arc::new(AuthStore::new());
        let cart = Arc::new(CartStore::new());
        let toasts =
            Arc::new(ToastQueue::new(Duration::from_millis(config.session.toast_duration_ms)));

        Self {
            auth_service: AuthService::new(gateways.session.clone(), Arc::clone(&auth)),
            catalog: CatalogService::new(gateways.catalog.clone(), Arc::clone(&cart)),
            feed: FeedService::new(
                gateways.social.clone(),
                Arc::clone(&auth),
                config.session.max_post_chars,
            ),
            checkout: CheckoutService::new(
                gateways.orders.clone(),
                Arc::clone(&cart),
                Arc::clone(&auth),
            ),
            orders: OrderService::new(gateways.orders.clone(), Arc::clone(&auth)),
            auctions: AuctionService::new(gateways.auctions.clone(), Arc::clone(&auth)),
            rewards: RewardsService::new(gateways.rewards.clone(), Arc::clone(&auth)),
            alerts: StockAlertService::new(gateways.alerts.clone(), Arc::clone(&auth)),
            subscriptions: SubscriptionService::new(
                gateways.subscriptions.clone(),
                Arc::clone(&auth),
            ),
            admin_console: Mutex::new(AdminConsole::new(
                gateways.admin.clone(),
                gateways.catalog.clone(),
                Arc::clone(&auth),
            )),
            notifications: Mutex::new(NotificationCenter::new(
                gateways.notifications.clone(),
                Arc::clone(&auth),
            )),
            conversations: Mutex::new(ConversationView::new(
                gateways.messaging.clone(),
                Arc::clone(&auth),
            )),
            shop_dashboard: Mutex::new(None),
            engagements: Mutex::new(HashMap::new()),
            follows: Mutex::new(HashMap::new()),
            config,
            gateways,
            auth,
            cart,
            toasts,
        }
    }
}
