//! Seed data for the in-memory backend

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use marketfeed_domain::constants::{
    DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, DEMO_EMAIL, DEMO_PASSWORD, MOCK_USERNAME,
};
use marketfeed_domain::{
    AdminUser, AlertStatus, AuctionDetail, Bid, Brand, Category, CoinBalance, Conversation,
    LoyaltyStatus, LoyaltyTier, MasterProduct, Message, Money, Notification, NotificationKind,
    Order, OrderItem, OrderStatus, Post, PostProduct, Product, ProductDetail, ProductVariation,
    RelatedProduct, ReturnRequest, ReturnStatus, Review, SellerOffer, ShopInfo, ShopLoyalty,
    ShopOrder, ShopOrderItem, ShopProduct, ShopStatus, ShopSummary, StockAlert,
    SubscriptionPlan, SubscriptionStatus, User, UserRole, UserSubscription,
};

const AVATAR: &str = "https://via.placeholder.com/40";

/// A login the mock accepts
#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub user: User,
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).single().unwrap_or_default()
}

fn placeholder(size: &str, text: &str) -> String {
    format!("https://via.placeholder.com/{size}?text={text}")
}

fn product(
    id: u32,
    name: &str,
    category: &str,
    brand: &str,
    cents: i64,
    image_text: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        price: Money::from_cents(cents),
        original_price: None,
        image: placeholder("150", image_text),
    }
}

fn on_sale(mut product: Product, original_cents: i64) -> Product {
    product.original_price = Some(Money::from_cents(original_cents));
    product
}

pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            user: User {
                id: "mockuser".to_string(),
                username: MOCK_USERNAME.to_string(),
                email: DEMO_EMAIL.to_string(),
                role: UserRole::Customer,
            },
        },
        Account {
            email: DEMO_ADMIN_EMAIL.to_string(),
            password: DEMO_ADMIN_PASSWORD.to_string(),
            user: User {
                id: "admin".to_string(),
                username: "Admin".to_string(),
                email: DEMO_ADMIN_EMAIL.to_string(),
                role: UserRole::Admin,
            },
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Smartphone X", "Electronics", "BrandA", 79_999, "Smartphone"),
        product(2, "Designer Dress", "Fashion", "BrandB", 19_950, "Dress"),
        product(3, "Smart Home Hub", "Electronics", "BrandA", 12_000, "Smart+Hub"),
        product(4, "Novel Book", "Books", "BrandC", 2_500, "Book"),
    ]
}

pub fn new_arrivals() -> Vec<Product> {
    vec![
        product(5, "New Wireless Earbuds", "Electronics", "BrandD", 7_999, "Earbuds"),
        product(6, "Summer Collection T-Shirt", "Fashion", "BrandE", 2_999, "T-Shirt"),
    ]
}

pub fn promotions() -> Vec<Product> {
    vec![
        on_sale(
            product(7, "Limited Edition Watch", "Accessories", "BrandF", 14_999, "Watch"),
            19_999,
        ),
        on_sale(product(8, "Gaming Keyboard", "Electronics", "BrandG", 5_999, "Keyboard"), 8_999),
    ]
}

pub fn popular_products() -> Vec<Product> {
    vec![
        product(9, "Best-selling Coffee Maker", "Home & Garden", "BrandH", 8_900, "Coffee+Maker"),
        product(10, "Top Rated Backpack", "Fashion", "BrandI", 4_500, "Backpack"),
    ]
}

/// Detail page for a known product
pub fn product_detail(id: u32) -> ProductDetail {
    let variation = |id, name: &str, cents, stock| ProductVariation {
        id,
        name: name.to_string(),
        price: Money::from_cents(cents),
        stock,
    };
    let seller = |id, name: &str, cents, stock| SellerOffer {
        id,
        name: name.to_string(),
        price: Money::from_cents(cents),
        stock,
    };
    let related = |id, name: &str, cents| RelatedProduct {
        id,
        name: name.to_string(),
        image: "https://via.placeholder.com/100".to_string(),
        price: Money::from_cents(cents),
    };

    ProductDetail {
        id,
        name: format!("Product {id}"),
        description: format!(
            "This is a detailed description for Product {id}. It's an amazing item with many \
             features and benefits."
        ),
        long_description: format!(
            "This is a longer, more detailed description for Product {id}. It covers all the \
             intricate details, specifications, and use cases."
        ),
        images: (1..=3)
            .map(|n| placeholder("600x400", &format!("Product+{id}+Image+{n}")))
            .collect(),
        variations: vec![
            variation(1, "Small", 1_000, 50),
            variation(2, "Medium", 1_200, 75),
            variation(3, "Large", 1_500, 30),
        ],
        sellers: vec![seller(1, "Shop A", 1_100, 20), seller(2, "Shop B", 1_050, 40)],
        reviews: vec![
            Review {
                id: 1,
                author: "Alice".to_string(),
                rating: 5,
                comment: "Great product, highly recommend!".to_string(),
            },
            Review {
                id: 2,
                author: "Bob".to_string(),
                rating: 4,
                comment: "Good quality, but a bit pricey.".to_string(),
            },
        ],
        related_products: vec![
            related(101, "Related Product 1", 2_500),
            related(102, "Related Product 2", 3_500),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u32,
    username: &str,
    handle: &str,
    age: Duration,
    content: &str,
    product: Option<PostProduct>,
    (comments, reposts, likes): (u32, u32, u32),
    now: DateTime<Utc>,
) -> Post {
    Post {
        id,
        username: username.to_string(),
        handle: handle.to_string(),
        content: content.to_string(),
        avatar_src: AVATAR.to_string(),
        product,
        comments,
        reposts,
        likes,
        created_at: now - age,
    }
}

pub fn feed_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        post(
            1,
            "User Name",
            "username",
            Duration::hours(2),
            "Check out this amazing new product! #ecommerce #deal",
            Some(PostProduct {
                name: "Awesome Product Name".to_string(),
                price: Money::from_cents(9_999),
                image_src: "https://via.placeholder.com/80".to_string(),
                link: "#".to_string(),
            }),
            (12, 5, 23),
            now,
        ),
        post(
            2,
            "Another User",
            "anotheruser",
            Duration::hours(5),
            "Just got this amazing gadget! Highly recommend it. #tech #gadget",
            None,
            (8, 3, 15),
            now,
        ),
    ]
}

pub fn profile_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        post(
            101,
            "User Name",
            "username",
            Duration::days(1),
            "My latest thoughts on e-commerce trends! #ecommerce #trends",
            None,
            (5, 2, 10),
            now,
        ),
        post(
            102,
            "User Name",
            "username",
            Duration::days(3),
            "Just listed a new product! Check it out!",
            Some(PostProduct {
                name: "Vintage Camera".to_string(),
                price: Money::from_cents(25_000),
                image_src: placeholder("80", "Camera"),
                link: "#".to_string(),
            }),
            (3, 1, 8),
            now,
        ),
    ]
}

fn order_item(product_id: u32, name: &str, cents: i64) -> OrderItem {
    OrderItem { product_id, name: name.to_string(), quantity: 1, price: Money::from_cents(cents) }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1001,
            date: date(2025, 7, 1),
            total: Money::from_cents(12_000),
            status: OrderStatus::Delivered,
            items: vec![
                order_item(1, "Smartphone X", 79_999),
                order_item(3, "Smart Home Hub", 12_000),
            ],
        },
        Order {
            id: 1002,
            date: date(2025, 7, 3),
            total: Money::from_cents(2_999),
            status: OrderStatus::Pending,
            items: vec![order_item(6, "Summer Collection T-Shirt", 2_999)],
        },
    ]
}

pub fn returns() -> Vec<ReturnRequest> {
    vec![
        ReturnRequest {
            id: 2001,
            order_id: 1001,
            product_id: 1,
            product_name: "Smartphone X".to_string(),
            reason: "Defective item".to_string(),
            status: ReturnStatus::Pending,
            date_requested: date(2025, 7, 5),
        },
        ReturnRequest {
            id: 2002,
            order_id: 1002,
            product_id: 6,
            product_name: "Summer Collection T-Shirt".to_string(),
            reason: "Wrong size".to_string(),
            status: ReturnStatus::Approved,
            date_requested: date(2025, 7, 4),
        },
    ]
}

pub fn shop_info(shop_id: &str) -> ShopInfo {
    ShopInfo {
        name: format!("Mock Shop for {shop_id}"),
        description: format!(
            "This is the official shop of {shop_id}. We sell high-quality products."
        ),
        logo: placeholder("100", "ShopLogo"),
    }
}

pub fn shop_products() -> Vec<ShopProduct> {
    vec![
        ShopProduct {
            id: 1,
            name: "Shop Product 1".to_string(),
            price: Money::from_cents(1_000),
            stock: 100,
            image: placeholder("150", "ShopProd1"),
        },
        ShopProduct {
            id: 2,
            name: "Shop Product 2".to_string(),
            price: Money::from_cents(2_550),
            stock: 50,
            image: placeholder("150", "ShopProd2"),
        },
    ]
}

pub fn shop_orders() -> Vec<ShopOrder> {
    vec![
        ShopOrder {
            id: 1,
            customer_name: "Customer A".to_string(),
            total: Money::from_cents(3_550),
            status: OrderStatus::Pending,
            items: vec![ShopOrderItem { name: "Shop Product 1".to_string(), quantity: 1 }],
        },
        ShopOrder {
            id: 2,
            customer_name: "Customer B".to_string(),
            total: Money::from_cents(10_000),
            status: OrderStatus::Shipped,
            items: vec![ShopOrderItem { name: "Shop Product 2".to_string(), quantity: 2 }],
        },
    ]
}

pub fn users() -> Vec<AdminUser> {
    let user = |id: &str, name: &str, role, is_banned| AdminUser {
        id: id.to_string(),
        username: name.to_string(),
        email: format!("{}@example.com", name.to_ascii_lowercase()),
        role,
        is_banned,
    };
    vec![
        user("user1", "Alice", UserRole::Customer, false),
        user("user2", "Bob", UserRole::Seller, false),
        user("user3", "Charlie", UserRole::Admin, false),
        user("user4", "David", UserRole::Customer, true),
    ]
}

pub fn shops() -> Vec<ShopSummary> {
    let shop = |id: &str, name: &str, owner: &str, status| ShopSummary {
        id: id.to_string(),
        name: name.to_string(),
        owner: owner.to_string(),
        status,
    };
    vec![
        shop("shop1", "Electronics Hub", "Bob", ShopStatus::Approved),
        shop("shop2", "Fashion Trends", "Eve", ShopStatus::Pending),
        shop("shop3", "Home Goods Store", "Frank", ShopStatus::Suspended),
    ]
}

pub fn master_products() -> Vec<MasterProduct> {
    let master = |id, name: &str, category: &str, brand: &str| MasterProduct {
        id,
        name: name.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
    };
    vec![
        master(1, "Master Product A", "Electronics", "GlobalTech"),
        master(2, "Master Product B", "Fashion", "StyleCo"),
        master(3, "Master Product C", "Home & Garden", "HomeEssentials"),
    ]
}

pub fn categories() -> Vec<Category> {
    ["Electronics", "Fashion", "Home & Garden", "Books"]
        .iter()
        .zip(1..)
        .map(|(name, n)| Category { id: format!("cat{n}"), name: (*name).to_string() })
        .collect()
}

pub fn brands() -> Vec<Brand> {
    ["GlobalTech", "StyleCo", "HomeEssentials"]
        .iter()
        .zip(1..)
        .map(|(name, n)| Brand { id: format!("brand{n}"), name: (*name).to_string() })
        .collect()
}

/// Auctions ending one, two and three hours after `now`
pub fn auctions(now: DateTime<Utc>) -> Vec<AuctionDetail> {
    let bid = |bidder: &str, units, ago_ms| Bid {
        bidder: bidder.to_string(),
        amount: Money::from_units(units),
        time: now - Duration::milliseconds(ago_ms),
    };
    let auction = |id, name: &str, description: &str, units, hours, image: &str, history| {
        AuctionDetail {
            id,
            name: name.to_string(),
            description: description.to_string(),
            current_bid: Money::from_units(units),
            end_time: now + Duration::hours(hours),
            image: placeholder("600x400", image),
            bid_history: history,
        }
    };

    vec![
        auction(
            1,
            "Vintage Comic Book",
            "A rare first edition comic book in excellent condition.",
            50,
            1,
            "ComicBookDetail",
            vec![bid("User1", 45, 1_000_000), bid("User2", 50, 500_000)],
        ),
        auction(
            2,
            "Rare Collectible Coin",
            "A very rare coin from the 18th century.",
            120,
            2,
            "CoinDetail",
            vec![bid("UserA", 110, 1_500_000), bid("UserB", 120, 800_000)],
        ),
        auction(
            3,
            "Antique Vase",
            "A beautiful antique vase from the Ming Dynasty.",
            300,
            3,
            "VaseDetail",
            vec![bid("UserX", 280, 2_000_000), bid("UserY", 300, 1_000_000)],
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn loyalty() -> LoyaltyStatus {
    LoyaltyStatus {
        points: 1250,
        tier: LoyaltyTier::Gold,
        benefits: strings(&["Free shipping", "Exclusive discounts", "Early access to sales"]),
    }
}

pub fn shop_loyalty() -> Vec<ShopLoyalty> {
    vec![
        ShopLoyalty {
            shop_name: "Electronics Hub".to_string(),
            points: 300,
            tier: LoyaltyTier::Silver,
            benefits: strings(&["5% off on all electronics"]),
        },
        ShopLoyalty {
            shop_name: "Fashion Trends".to_string(),
            points: 700,
            tier: LoyaltyTier::Gold,
            benefits: strings(&["10% off on all fashion items", "Personal stylist"]),
        },
    ]
}

pub fn coins() -> CoinBalance {
    CoinBalance { balance: Money::from_cents(50_075) }
}

pub fn stock_alerts() -> Vec<StockAlert> {
    vec![
        StockAlert {
            id: 1,
            product_id: 1,
            product_name: "Smartphone X".to_string(),
            status: AlertStatus::Active,
        },
        StockAlert {
            id: 2,
            product_id: 4,
            product_name: "Novel Book".to_string(),
            status: AlertStatus::Active,
        },
    ]
}

pub fn plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: 1,
            name: "Basic Plan".to_string(),
            price: Money::from_cents(999),
            features: strings(&["Access to basic features", "Ad-supported"]),
        },
        SubscriptionPlan {
            id: 2,
            name: "Premium Plan".to_string(),
            price: Money::from_cents(1_999),
            features: strings(&["Access to all features", "Ad-free", "Priority support"]),
        },
    ]
}

pub fn subscriptions() -> Vec<UserSubscription> {
    vec![UserSubscription {
        id: 1,
        plan_id: 1,
        plan_name: "Basic Plan".to_string(),
        status: SubscriptionStatus::Active,
        start_date: date(2025, 6, 1),
        end_date: date(2026, 6, 1),
    }]
}

pub fn notifications() -> Vec<Notification> {
    let note = |id, kind, message: &str, read, timestamp| Notification {
        id,
        kind,
        message: message.to_string(),
        read,
        timestamp,
    };
    vec![
        note(1, NotificationKind::Social, "User A liked your post.", false, instant(2025, 7, 5, 10, 0)),
        note(
            2,
            NotificationKind::Order,
            "Your order #1001 has been shipped.",
            false,
            instant(2025, 7, 5, 9, 30),
        ),
        note(
            3,
            NotificationKind::Promotion,
            "New flash sale on electronics!",
            true,
            instant(2025, 7, 4, 18, 0),
        ),
    ]
}

pub fn conversations() -> Vec<Conversation> {
    let conversation = |id, participant: &str, last: &str, time: &str| Conversation {
        id,
        participant: participant.to_string(),
        last_message: last.to_string(),
        last_message_time: time.to_string(),
        avatar: AVATAR.to_string(),
    };
    vec![
        conversation(1, "User X", "Hey, how are you?", "10:30 AM"),
        conversation(2, "User Y", "Looking for a product.", "Yesterday"),
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            sender: "User X".to_string(),
            content: "Hi there! How can I help you?".to_string(),
            timestamp: "10:30 AM".to_string(),
        },
        Message {
            id: 2,
            sender: MOCK_USERNAME.to_string(),
            content: "I'm looking for a specific product.".to_string(),
            timestamp: "10:35 AM".to_string(),
        },
    ]
}
