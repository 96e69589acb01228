mod support;

use marketfeed_core::{
    AuctionService, ConversationView, NotificationCenter, RewardsService, StockAlertService,
    SubscriptionService,
};
use marketfeed_domain::{MarketError, Money, NotificationKind, SubscriptionStatus, UserRole};
use support::{signed_in, signed_out, FakeBackend};

#[tokio::test]
async fn bid_must_beat_current_bid() {
    let backend = FakeBackend::new();
    let auctions = AuctionService::new(backend.clone(), signed_in(UserRole::Customer));

    let err = auctions.place_bid(1, Money::from_units(50)).await.unwrap_err();

    assert_eq!(
        err,
        MarketError::InvalidInput("Your bid must be higher than the current bid of $50.00".into())
    );
    assert_eq!(backend.count("place_bid"), 0);
}

#[tokio::test]
async fn accepted_bid_refreshes_detail() {
    let backend = FakeBackend::new();
    let auctions = AuctionService::new(backend.clone(), signed_in(UserRole::Customer));

    let detail = auctions.place_bid(1, Money::from_cents(5_050)).await.unwrap();

    assert_eq!(detail.current_bid, Money::from_cents(5_050));
    assert_eq!(backend.bids.lock()[0].2, "MockUser");
}

#[tokio::test]
async fn bidding_requires_login_and_known_auction() {
    let backend = FakeBackend::new();
    let guest = AuctionService::new(backend.clone(), signed_out());
    assert!(matches!(guest.place_bid(1, Money::from_units(60)).await, Err(MarketError::Auth(_))));

    let member = AuctionService::new(backend.clone(), signed_in(UserRole::Customer));
    assert!(matches!(member.detail(42).await, Err(MarketError::NotFound(_))));
}

#[tokio::test]
async fn marking_notification_read_lowers_unread_count() {
    let backend = FakeBackend::new();
    let mut center = NotificationCenter::new(backend.clone(), signed_in(UserRole::Customer));

    center.load().await.unwrap();
    assert_eq!(center.unread_count(), 2);
    assert_eq!(center.by_kind(NotificationKind::Order).count(), 1);

    center.mark_as_read(1).await.unwrap();
    assert_eq!(center.unread_count(), 1);

    backend.fail("mark_notification_as_read");
    assert!(center.mark_as_read(2).await.is_err());
    assert_eq!(center.unread_count(), 1);
}

#[tokio::test]
async fn sending_message_appends_and_updates_preview() {
    let backend = FakeBackend::new();
    let mut view = ConversationView::new(backend.clone(), signed_in(UserRole::Customer));
    view.load_conversations().await.unwrap();

    view.set_draft("hello");
    assert!(matches!(view.send().await, Err(MarketError::InvalidInput(_))));

    view.select(1).await.unwrap();
    view.set_draft("   ");
    assert!(matches!(view.send().await, Err(MarketError::Validation(_))));

    view.set_draft("Do you ship abroad?");
    let sent = view.send().await.unwrap();

    assert_eq!(sent.id, 3);
    assert_eq!(sent.sender, "MockUser");
    assert_eq!(view.messages().len(), 3);
    assert_eq!(view.conversations()[0].last_message, "Do you ship abroad?");
    assert!(view.draft().is_empty());
}

#[tokio::test]
async fn subscribe_rejects_duplicate_active_plan() {
    let backend = FakeBackend::new();
    let service = SubscriptionService::new(backend.clone(), signed_in(UserRole::Customer));

    let overview = service.subscribe(1).await.unwrap();
    assert!(overview.is_subscribed(1));
    assert_eq!(overview.plans.len(), 2);

    assert!(matches!(service.subscribe(1).await, Err(MarketError::InvalidInput(_))));

    let overview = service.cancel(1).await.unwrap();
    assert_eq!(overview.subscriptions[0].status, SubscriptionStatus::Cancelled);
    assert!(!overview.is_subscribed(1));
}

#[tokio::test]
async fn stock_alert_subscription_reloads_list() {
    let backend = FakeBackend::new();
    let alerts = StockAlertService::new(backend.clone(), signed_in(UserRole::Customer));

    assert!(matches!(alerts.subscribe(0).await, Err(MarketError::Validation(_))));

    let list = alerts.subscribe(7).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].product_id, 7);
}

#[tokio::test]
async fn rewards_dashboard_combines_points() {
    let backend = FakeBackend::new();
    let rewards = RewardsService::new(backend.clone(), signed_in(UserRole::Customer));

    let dashboard = rewards.dashboard().await.unwrap();

    assert_eq!(dashboard.total_points(), 1_550);
    assert_eq!(dashboard.coins.balance.to_string(), "$500.75");
    assert!(matches!(
        RewardsService::new(backend.clone(), signed_out()).coin_balance().await,
        Err(MarketError::Auth(_))
    ));
}
