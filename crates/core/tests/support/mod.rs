//! Shared test helpers for `marketfeed-core` integration tests.
//!
//! `FakeBackend` implements every gateway over small in-memory lists and
//! records the calls it receives, so tests can focus on page behaviour.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use marketfeed_core::{
    AdminGateway, AuctionGateway, AuthStore, CatalogGateway, MessagingGateway,
    NotificationGateway, OrderGateway, RewardsGateway, SessionGateway, ShopGateway,
    SocialGateway, StockAlertGateway, SubscriptionGateway,
};
use marketfeed_domain::{
    Ack, AdminUser, AlertStatus, Auction, AuctionDetail, Bid, Brand, Category, CoinBalance,
    Conversation, LoyaltyStatus, LoyaltyTier, MarketError, MasterProduct, MasterProductDraft,
    MasterProductPatch, Message, Money, NewPost, Notification, NotificationKind, Order,
    OrderConfirmation, OrderRequest, OrderStatus, Post, Product, ProductDetail, ProductFilter,
    ProfileUpdate, RegisterRequest, RegisterResponse, Result, ReturnRequest, ReturnStatus,
    ReturnTicket, Session, ShopInfo, ShopLoyalty, ShopOrder, ShopOrderItem, ShopProduct,
    ShopProductDraft, ShopProductPatch, ShopStatus, ShopSummary, StockAlert, SubscriptionPlan,
    SubscriptionStatus, User, UserRole, UserSubscription,
};
use parking_lot::Mutex;

/// In-memory gateway set with call recording and failure injection
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    /// Sleep applied to like/unlike so tests can overlap calls
    pub like_delay: Option<Duration>,
    pub placed_orders: Mutex<Vec<OrderRequest>>,
    pub bids: Mutex<Vec<(u32, Money, String)>>,
    pub auction_bid: Mutex<Option<Money>>,
    pub subscriptions: Mutex<Vec<UserSubscription>>,
    pub alerts: Mutex<Vec<StockAlert>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_like_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self { like_delay: Some(delay), ..Self::default() })
    }

    /// Every later call of `operation` fails with a network error
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.failing.lock().remove(operation);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == operation).count()
    }

    fn hit(&self, operation: &'static str) -> Result<()> {
        self.calls.lock().push(operation.to_string());
        if self.failing.lock().contains(operation) {
            return Err(MarketError::Network(format!("{operation} unavailable")));
        }
        Ok(())
    }
}

pub fn user(role: UserRole) -> User {
    User {
        id: "user1".into(),
        username: "MockUser".into(),
        email: "user@example.com".into(),
        role,
    }
}

/// Auth store with a signed-in user of `role`
pub fn signed_in(role: UserRole) -> Arc<AuthStore> {
    let store = Arc::new(AuthStore::new());
    store.sign_in(Session { token: "mock-jwt-token".into(), user: user(role) });
    store
}

pub fn signed_out() -> Arc<AuthStore> {
    Arc::new(AuthStore::new())
}

pub fn post(id: u32, likes: u32) -> Post {
    Post {
        id,
        username: "User Name".into(),
        handle: "username".into(),
        content: "Check out this amazing new product! #ecommerce".into(),
        avatar_src: String::new(),
        product: None,
        comments: 12,
        reposts: 5,
        likes,
        created_at: Utc::now() - ChronoDuration::hours(2),
    }
}

fn product(id: u32, name: &str, cents: i64) -> Product {
    Product {
        id,
        name: name.into(),
        category: "Electronics".into(),
        brand: "BrandA".into(),
        price: Money::from_cents(cents),
        original_price: None,
        image: String::new(),
    }
}

#[async_trait]
impl SessionGateway for FakeBackend {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.hit("login")?;
        if email == "user@example.com" && password == "password" {
            Ok(Session { token: "mock-jwt-token".into(), user: user(UserRole::Customer) })
        } else {
            Err(MarketError::Auth("Invalid credentials".into()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.hit("register")?;
        Ok(RegisterResponse {
            message: "Registration successful".into(),
            username: request.username.clone(),
            email: request.email.clone(),
        })
    }

    async fn update_profile(&self, _user_id: &str, _update: &ProfileUpdate) -> Result<Ack> {
        self.hit("update_profile")?;
        Ok(Ack::new("Profile updated successfully!"))
    }
}

#[async_trait]
impl CatalogGateway for FakeBackend {
    async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.hit("get_products")?;
        Ok([product(1, "Smartphone X", 79_999), product(3, "Smart Home Hub", 12_000)]
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }

    async fn get_new_arrivals(&self) -> Result<Vec<Product>> {
        self.hit("get_new_arrivals")?;
        Ok(vec![product(5, "New Wireless Earbuds", 7_999)])
    }

    async fn get_promotions(&self) -> Result<Vec<Product>> {
        self.hit("get_promotions")?;
        let mut watch = product(7, "Limited Edition Watch", 14_999);
        watch.original_price = Some(Money::from_cents(19_999));
        Ok(vec![watch])
    }

    async fn get_popular_products(&self) -> Result<Vec<Product>> {
        self.hit("get_popular_products")?;
        Ok(vec![product(9, "Best-selling Coffee Maker", 8_900)])
    }

    async fn get_product_details(&self, product_id: u32) -> Result<ProductDetail> {
        self.hit("get_product_details")?;
        Err(MarketError::not_found("product", product_id))
    }

    async fn get_master_products(&self) -> Result<Vec<MasterProduct>> {
        self.hit("get_master_products")?;
        Ok(vec![MasterProduct {
            id: 1,
            name: "Master Product A".into(),
            category: "Electronics".into(),
            brand: "GlobalTech".into(),
        }])
    }

    async fn add_master_product(&self, draft: &MasterProductDraft) -> Result<MasterProduct> {
        self.hit("add_master_product")?;
        Ok(MasterProduct {
            id: 4,
            name: draft.name.clone(),
            category: draft.category.clone(),
            brand: draft.brand.clone(),
        })
    }

    async fn update_master_product(&self, _id: u32, _patch: &MasterProductPatch) -> Result<Ack> {
        self.hit("update_master_product")?;
        Ok(Ack::new("Master product updated successfully!"))
    }

    async fn delete_master_product(&self, _id: u32) -> Result<Ack> {
        self.hit("delete_master_product")?;
        Ok(Ack::new("Master product deleted successfully!"))
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.hit("get_categories")?;
        Ok(vec![Category { id: "cat1".into(), name: "Electronics".into() }])
    }

    async fn add_category(&self, name: &str) -> Result<Category> {
        self.hit("add_category")?;
        Ok(Category { id: "cat5".into(), name: name.into() })
    }

    async fn get_brands(&self) -> Result<Vec<Brand>> {
        self.hit("get_brands")?;
        Ok(vec![Brand { id: "brand1".into(), name: "GlobalTech".into() }])
    }

    async fn add_brand(&self, name: &str) -> Result<Brand> {
        self.hit("add_brand")?;
        Ok(Brand { id: "brand4".into(), name: name.into() })
    }
}

#[async_trait]
impl SocialGateway for FakeBackend {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        self.hit("get_posts")?;
        Ok(vec![post(1, 23), post(2, 15)])
    }

    async fn get_user_posts(&self, _user_id: &str) -> Result<Vec<Post>> {
        self.hit("get_user_posts")?;
        Ok(vec![post(101, 10)])
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Post> {
        self.hit("create_post")?;
        let mut created = post(500, 0);
        created.username.clone_from(&new_post.author);
        created.content.clone_from(&new_post.content);
        Ok(created)
    }

    async fn like_post(&self, _post_id: u32) -> Result<Ack> {
        self.hit("like_post")?;
        if let Some(delay) = self.like_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Ack::new("Post liked successfully!"))
    }

    async fn unlike_post(&self, _post_id: u32) -> Result<Ack> {
        self.hit("unlike_post")?;
        if let Some(delay) = self.like_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(Ack::new("Post unliked successfully!"))
    }

    async fn comment_on_post(&self, _post_id: u32, _content: &str) -> Result<Ack> {
        self.hit("comment_on_post")?;
        Ok(Ack::new("Comment added successfully!"))
    }

    async fn follow_user(&self, _user_id: &str) -> Result<Ack> {
        self.hit("follow_user")?;
        Ok(Ack::new("User followed successfully!"))
    }

    async fn unfollow_user(&self, _user_id: &str) -> Result<Ack> {
        self.hit("unfollow_user")?;
        Ok(Ack::new("User unfollowed successfully!"))
    }
}

#[async_trait]
impl OrderGateway for FakeBackend {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation> {
        self.hit("place_order")?;
        self.placed_orders.lock().push(request.clone());
        Ok(OrderConfirmation { message: "Order placed successfully!".into(), order_id: 1003 })
    }

    async fn get_orders(&self) -> Result<Vec<Order>> {
        self.hit("get_orders")?;
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default();
        Ok(vec![
            Order {
                id: 1001,
                date,
                total: Money::from_cents(12_000),
                status: OrderStatus::Delivered,
                items: Vec::new(),
            },
            Order {
                id: 1002,
                date,
                total: Money::from_cents(2_999),
                status: OrderStatus::Pending,
                items: Vec::new(),
            },
        ])
    }

    async fn request_return(&self, order_id: u32, product_id: u32, _reason: &str) -> Result<ReturnTicket> {
        self.hit("request_return")?;
        Ok(ReturnTicket {
            message: format!("Return for order {order_id} product {product_id} submitted"),
            request_id: 2003,
        })
    }

    async fn get_returns(&self) -> Result<Vec<ReturnRequest>> {
        self.hit("get_returns")?;
        Ok(vec![ReturnRequest {
            id: 2001,
            order_id: 1001,
            product_id: 1,
            product_name: "Smartphone X".into(),
            reason: "Defective item".into(),
            status: ReturnStatus::Pending,
            date_requested: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap_or_default(),
        }])
    }
}

#[async_trait]
impl ShopGateway for FakeBackend {
    async fn get_shop_info(&self, shop_id: &str) -> Result<ShopInfo> {
        self.hit("get_shop_info")?;
        Ok(ShopInfo {
            name: format!("Mock Shop for {shop_id}"),
            description: String::new(),
            logo: String::new(),
        })
    }

    async fn update_shop_info(&self, _shop_id: &str, _info: &ShopInfo) -> Result<Ack> {
        self.hit("update_shop_info")?;
        Ok(Ack::new("Shop info updated successfully!"))
    }

    async fn get_shop_products(&self, _shop_id: &str) -> Result<Vec<ShopProduct>> {
        self.hit("get_shop_products")?;
        Ok(vec![ShopProduct {
            id: 1,
            name: "Shop Product 1".into(),
            price: Money::from_cents(1_000),
            stock: 100,
            image: String::new(),
        }])
    }

    async fn add_shop_product(&self, _shop_id: &str, draft: &ShopProductDraft) -> Result<ShopProduct> {
        self.hit("add_shop_product")?;
        Ok(ShopProduct {
            id: 3,
            name: draft.name.clone(),
            price: draft.price,
            stock: u32::try_from(draft.stock).unwrap_or_default(),
            image: draft.image.clone(),
        })
    }

    async fn update_shop_product(&self, _shop_id: &str, _id: u32, _patch: &ShopProductPatch) -> Result<Ack> {
        self.hit("update_shop_product")?;
        Ok(Ack::new("Product updated successfully!"))
    }

    async fn delete_shop_product(&self, _shop_id: &str, _id: u32) -> Result<Ack> {
        self.hit("delete_shop_product")?;
        Ok(Ack::new("Product deleted successfully!"))
    }

    async fn get_shop_orders(&self, _shop_id: &str) -> Result<Vec<ShopOrder>> {
        self.hit("get_shop_orders")?;
        Ok(vec![ShopOrder {
            id: 1,
            customer_name: "Customer A".into(),
            total: Money::from_cents(3_550),
            status: OrderStatus::Pending,
            items: vec![ShopOrderItem { name: "Shop Product 1".into(), quantity: 1 }],
        }])
    }

    async fn update_shop_order_status(&self, _shop_id: &str, _id: u32, _status: OrderStatus) -> Result<Ack> {
        self.hit("update_shop_order_status")?;
        Ok(Ack::new("Order status updated successfully!"))
    }
}

#[async_trait]
impl AdminGateway for FakeBackend {
    async fn get_all_users(&self) -> Result<Vec<AdminUser>> {
        self.hit("get_all_users")?;
        Ok(vec![AdminUser {
            id: "user1".into(),
            username: "Alice".into(),
            email: "alice@example.com".into(),
            role: UserRole::Customer,
            is_banned: false,
        }])
    }

    async fn ban_user(&self, _user_id: &str) -> Result<Ack> {
        self.hit("ban_user")?;
        Ok(Ack::new("User banned successfully!"))
    }

    async fn get_all_shops(&self) -> Result<Vec<ShopSummary>> {
        self.hit("get_all_shops")?;
        Ok(vec![ShopSummary {
            id: "shop2".into(),
            name: "Fashion Trends".into(),
            owner: "Eve".into(),
            status: ShopStatus::Pending,
        }])
    }

    async fn approve_shop(&self, _shop_id: &str) -> Result<Ack> {
        self.hit("approve_shop")?;
        Ok(Ack::new("Shop approved successfully!"))
    }

    async fn suspend_shop(&self, _shop_id: &str) -> Result<Ack> {
        self.hit("suspend_shop")?;
        Ok(Ack::new("Shop suspended successfully!"))
    }
}

#[async_trait]
impl AuctionGateway for FakeBackend {
    async fn get_auctions(&self) -> Result<Vec<Auction>> {
        self.hit("get_auctions")?;
        Ok(vec![self.auction_detail().summary()])
    }

    async fn get_auction_details(&self, auction_id: u32) -> Result<AuctionDetail> {
        self.hit("get_auction_details")?;
        if auction_id == 1 {
            Ok(self.auction_detail())
        } else {
            Err(MarketError::not_found("auction", auction_id))
        }
    }

    async fn place_bid(&self, auction_id: u32, amount: Money, bidder: &str) -> Result<Ack> {
        self.hit("place_bid")?;
        self.bids.lock().push((auction_id, amount, bidder.to_string()));
        *self.auction_bid.lock() = Some(amount);
        Ok(Ack::new("Bid placed successfully!"))
    }
}

impl FakeBackend {
    fn auction_detail(&self) -> AuctionDetail {
        let now = Utc::now();
        let current = self.auction_bid.lock().unwrap_or(Money::from_units(50));
        AuctionDetail {
            id: 1,
            name: "Vintage Comic Book".into(),
            description: String::new(),
            current_bid: current,
            end_time: now + ChronoDuration::hours(1),
            image: String::new(),
            bid_history: vec![Bid { bidder: "User2".into(), amount: current, time: now }],
        }
    }
}

#[async_trait]
impl RewardsGateway for FakeBackend {
    async fn get_loyalty_status(&self, _user_id: &str) -> Result<LoyaltyStatus> {
        self.hit("get_loyalty_status")?;
        Ok(LoyaltyStatus { points: 1250, tier: LoyaltyTier::Gold, benefits: Vec::new() })
    }

    async fn get_shop_loyalty_status(&self, _user_id: &str) -> Result<Vec<ShopLoyalty>> {
        self.hit("get_shop_loyalty_status")?;
        Ok(vec![ShopLoyalty {
            shop_name: "Electronics Hub".into(),
            points: 300,
            tier: LoyaltyTier::Silver,
            benefits: Vec::new(),
        }])
    }

    async fn get_virtual_coin_balance(&self, _user_id: &str) -> Result<CoinBalance> {
        self.hit("get_virtual_coin_balance")?;
        Ok(CoinBalance { balance: Money::from_cents(50_075) })
    }
}

#[async_trait]
impl StockAlertGateway for FakeBackend {
    async fn subscribe_to_stock_alerts(&self, product_id: u32, _user_id: &str) -> Result<Ack> {
        self.hit("subscribe_to_stock_alerts")?;
        let mut alerts = self.alerts.lock();
        let id = u32::try_from(alerts.len()).unwrap_or_default() + 1;
        alerts.push(StockAlert {
            id,
            product_id,
            product_name: format!("Product {product_id}"),
            status: AlertStatus::Active,
        });
        Ok(Ack::new("Subscribed to stock alerts successfully!"))
    }

    async fn get_subscribed_stock_alerts(&self, _user_id: &str) -> Result<Vec<StockAlert>> {
        self.hit("get_subscribed_stock_alerts")?;
        Ok(self.alerts.lock().clone())
    }
}

#[async_trait]
impl SubscriptionGateway for FakeBackend {
    async fn get_available_subscription_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        self.hit("get_available_subscription_plans")?;
        Ok(vec![
            SubscriptionPlan { id: 1, name: "Basic Plan".into(), price: Money::from_cents(999), features: Vec::new() },
            SubscriptionPlan { id: 2, name: "Premium Plan".into(), price: Money::from_cents(1_999), features: Vec::new() },
        ])
    }

    async fn get_subscriptions(&self, _user_id: &str) -> Result<Vec<UserSubscription>> {
        self.hit("get_subscriptions")?;
        Ok(self.subscriptions.lock().clone())
    }

    async fn subscribe_to_plan(&self, _user_id: &str, plan_id: u32) -> Result<Ack> {
        self.hit("subscribe_to_plan")?;
        let mut subs = self.subscriptions.lock();
        let id = u32::try_from(subs.len()).unwrap_or_default() + 1;
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
        subs.push(UserSubscription {
            id,
            plan_id,
            plan_name: format!("Plan {plan_id}"),
            status: SubscriptionStatus::Active,
            start_date: start,
            end_date: start,
        });
        Ok(Ack::new("Subscribed successfully!"))
    }

    async fn cancel_subscription(&self, _user_id: &str, subscription_id: u32) -> Result<Ack> {
        self.hit("cancel_subscription")?;
        for sub in self.subscriptions.lock().iter_mut().filter(|s| s.id == subscription_id) {
            sub.status = SubscriptionStatus::Cancelled;
        }
        Ok(Ack::new("Subscription cancelled successfully!"))
    }
}

#[async_trait]
impl NotificationGateway for FakeBackend {
    async fn get_notifications(&self, _user_id: &str) -> Result<Vec<Notification>> {
        self.hit("get_notifications")?;
        let now = Utc::now();
        Ok(vec![
            Notification { id: 1, kind: NotificationKind::Social, message: "User A liked your post.".into(), read: false, timestamp: now },
            Notification { id: 2, kind: NotificationKind::Order, message: "Your order #1001 has been shipped.".into(), read: false, timestamp: now },
            Notification { id: 3, kind: NotificationKind::Promotion, message: "New flash sale on electronics!".into(), read: true, timestamp: now },
        ])
    }

    async fn mark_notification_as_read(&self, _notification_id: u32) -> Result<Ack> {
        self.hit("mark_notification_as_read")?;
        Ok(Ack::new("Notification marked as read."))
    }
}

#[async_trait]
impl MessagingGateway for FakeBackend {
    async fn get_conversations(&self) -> Result<Vec<Conversation>> {
        self.hit("get_conversations")?;
        Ok(vec![Conversation {
            id: 1,
            participant: "User X".into(),
            last_message: "Hey, how are you?".into(),
            last_message_time: "10:30 AM".into(),
            avatar: String::new(),
        }])
    }

    async fn get_messages(&self, _conversation_id: u32) -> Result<Vec<Message>> {
        self.hit("get_messages")?;
        Ok(vec![
            Message { id: 1, sender: "User X".into(), content: "Hi there! How can I help you?".into(), timestamp: "10:30 AM".into() },
            Message { id: 2, sender: "MockUser".into(), content: "I'm looking for a specific product.".into(), timestamp: "10:35 AM".into() },
        ])
    }

    async fn send_message(&self, _conversation_id: u32, _sender: &str, _content: &str) -> Result<Ack> {
        self.hit("send_message")?;
        Ok(Ack::new("Message sent successfully!"))
    }
}
