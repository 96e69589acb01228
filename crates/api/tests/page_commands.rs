//! Social, admin, shop and inbox pages through the command layer

mod support;

use marketfeed_domain::{MarketError, Money, OrderStatus, ShopProductDraft, ShopStatus};
use marketfeed_lib::commands::{
    admin, alerts, auctions, messaging, notifications, shop, social, subscriptions,
};
use support::{admin_context, customer_context, last_error};

#[tokio::test]
async fn like_then_unlike_restores_counter() {
    let ctx = support::context();
    let posts = social::load_feed(&ctx).await.unwrap();
    let original = posts[0].likes;

    let liked = social::toggle_like(&ctx, posts[0].id).await.unwrap();
    assert!(liked.liked);
    assert_eq!(liked.likes, original + 1);

    let unliked = social::toggle_like(&ctx, posts[0].id).await.unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.likes, original);
}

#[tokio::test]
async fn engagement_needs_a_loaded_post() {
    let ctx = support::context();

    let err = social::toggle_like(&ctx, 1).await.unwrap_err();

    assert!(matches!(err, MarketError::NotFound(_)));
}

#[tokio::test]
async fn comment_bumps_counter() {
    let ctx = support::context();
    social::load_feed(&ctx).await.unwrap();

    let state = social::comment_on_post(&ctx, 2, "Looks great").await.unwrap();

    assert_eq!(state.comments, 9);
    assert!(state.comment_draft.is_empty());
}

#[tokio::test]
async fn new_post_is_trackable() {
    let ctx = customer_context().await;

    let post = social::create_post(&ctx, "Fresh haul #deal").await.unwrap();
    let state = social::toggle_bookmark(&ctx, post.id).await.unwrap();

    assert_eq!(post.username, "MockUser");
    assert!(state.bookmarked);
    assert_eq!(social::remaining_chars(&ctx, "abc"), 277);
}

#[tokio::test]
async fn follow_requires_login_then_toggles() {
    let ctx = support::context();
    assert!(matches!(social::toggle_follow(&ctx, "anotheruser").await, Err(MarketError::Auth(_))));

    let ctx = customer_context().await;
    assert!(social::toggle_follow(&ctx, "anotheruser").await.unwrap());
    assert!(!social::toggle_follow(&ctx, "anotheruser").await.unwrap());
}

#[tokio::test]
async fn customer_is_denied_the_admin_console() {
    let ctx = customer_context().await;

    let err = admin::open_admin_console(&ctx).await.unwrap_err();

    assert!(matches!(err, MarketError::Forbidden(_)));
    let console = ctx.admin_console.lock().await;
    assert!(!console.is_open());
    assert!(console.users().is_empty());
    assert!(last_error(&ctx).unwrap().starts_with("Access denied"));
}

#[tokio::test]
async fn admin_manages_users_and_shops() {
    let ctx = admin_context().await;

    let snapshot = admin::open_admin_console(&ctx).await.unwrap();
    assert_eq!(snapshot.users.len(), 4);
    assert_eq!(snapshot.categories.len(), 4);

    let snapshot = admin::ban_user(&ctx, "user2").await.unwrap();
    assert!(snapshot.users[1].is_banned);

    let snapshot = admin::approve_shop(&ctx, "shop2").await.unwrap();
    assert_eq!(snapshot.shops[1].status, ShopStatus::Approved);

    let snapshot = admin::add_brand(&ctx, "BrandZ").await.unwrap();
    assert_eq!(snapshot.brands.last().map(|b| b.name.as_str()), Some("BrandZ"));

    assert!(matches!(admin::add_category(&ctx, "  ").await, Err(MarketError::Validation(_))));
}

#[tokio::test]
async fn shop_dashboard_must_be_opened_first() {
    let ctx = customer_context().await;

    let err = shop::delete_shop_product(&ctx, 1).await.unwrap_err();

    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[tokio::test]
async fn shop_dashboard_updates_locally() {
    let ctx = customer_context().await;

    let snapshot = shop::open_shop_dashboard(&ctx, "shop1").await.unwrap();
    assert_eq!(snapshot.info.name, "Mock Shop for shop1");
    assert_eq!(snapshot.products.len(), 2);

    let draft = ShopProductDraft {
        name: "Desk Lamp".into(),
        price: Money::from_cents(1_999),
        stock: 4,
        image: String::new(),
    };
    let snapshot = shop::add_shop_product(&ctx, draft).await.unwrap();
    assert_eq!(snapshot.products.len(), 3);

    let snapshot = shop::update_shop_order_status(&ctx, 1, OrderStatus::Shipped).await.unwrap();
    assert_eq!(snapshot.orders[0].status, OrderStatus::Shipped);
}

#[tokio::test]
async fn low_bid_is_rejected() {
    let ctx = customer_context().await;

    let err = auctions::place_bid(&ctx, 1, Money::from_units(50)).await.unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));

    let detail = auctions::place_bid(&ctx, 1, Money::from_units(60)).await.unwrap();
    assert_eq!(detail.current_bid, Money::from_units(60));

    let list = auctions::list_auctions(&ctx).await.unwrap();
    assert_ne!(auctions::time_remaining(&list[0]), "Auction Ended");
}

#[tokio::test]
async fn mark_as_read_lowers_unread_count() {
    let ctx = customer_context().await;
    notifications::load_notifications(&ctx).await.unwrap();
    assert_eq!(notifications::unread_count(&ctx).await, 2);

    let unread = notifications::mark_notification_as_read(&ctx, 1).await.unwrap();

    assert_eq!(unread, 1);
}

#[tokio::test]
async fn message_goes_to_selected_conversation() {
    let ctx = customer_context().await;
    assert!(matches!(
        messaging::send_message(&ctx, "Hello").await,
        Err(MarketError::InvalidInput(_))
    ));

    messaging::load_conversations(&ctx).await.unwrap();
    let thread = messaging::select_conversation(&ctx, 1).await.unwrap();
    let sent = messaging::send_message(&ctx, " Hello ").await.unwrap();

    assert_eq!(sent.id, thread.len() as u32 + 1);
    assert_eq!(sent.content, "Hello");
    assert_eq!(sent.sender, "MockUser");
}

#[tokio::test]
async fn plan_and_alert_subscriptions() {
    let ctx = customer_context().await;

    let overview = subscriptions::subscribe_to_plan(&ctx, 2).await.unwrap();
    assert!(overview.is_subscribed(2));

    let alerts = alerts::subscribe_to_stock_alert(&ctx, 5).await.unwrap();
    assert!(alerts.iter().any(|a| a.product_name == "New Wireless Earbuds"));
}
