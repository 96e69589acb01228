//! Browsing, cart and checkout through the command layer

mod support;

use marketfeed_core::CartLineSelector;
use marketfeed_domain::{MarketError, Money, ShippingInfo};
use marketfeed_lib::commands::{cart, catalog, orders};
use support::{customer_context, last_error, shipping};

#[tokio::test]
async fn showcase_loads_all_rails() {
    let ctx = support::context();

    let showcase = catalog::showcase(&ctx).await.unwrap();

    assert_eq!(showcase.new_arrivals.len(), 2);
    assert_eq!(showcase.promotions[0].original_price, Some(Money::from_cents(19_999)));
    assert_eq!(showcase.popular[1].name, "Top Rated Backpack");
}

#[tokio::test]
async fn same_line_added_twice_merges() {
    let ctx = support::context();

    let item = cart::add_to_cart(&ctx, 1, 2, Some(2)).await.unwrap();
    cart::add_to_cart(&ctx, 1, 2, Some(2)).await.unwrap();

    assert_eq!(item.name, "Product 1 (Medium)");
    let summary = cart::cart_summary(&ctx);
    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.total_price, Money::from_cents(2_400));
}

#[tokio::test]
async fn variation_is_required() {
    let ctx = support::context();

    let err = cart::add_to_cart(&ctx, 1, 1, None).await.unwrap_err();

    assert_eq!(err, MarketError::InvalidInput("Please select a variation.".into()));
    assert!(cart::cart_summary(&ctx).items.is_empty());
    assert_eq!(last_error(&ctx).as_deref(), Some("Please select a variation."));
}

#[tokio::test]
async fn zero_quantity_removes_line() {
    let ctx = support::context();
    cart::add_to_cart(&ctx, 1, 1, Some(1)).await.unwrap();
    cart::add_to_cart(&ctx, 1, 1, Some(3)).await.unwrap();

    let summary = cart::update_cart_quantity(
        &ctx,
        &CartLineSelector { product_id: 1, variation_id: Some(1), seller_id: None },
        0,
    );
    assert_eq!(summary.items.len(), 1);
    assert_eq!(summary.items[0].variation_id, Some(3));

    let summary = cart::remove_from_cart(&ctx, &CartLineSelector::product(1));
    assert!(summary.items.is_empty());
}

#[tokio::test]
async fn checkout_clears_cart_and_records_order() {
    let ctx = customer_context().await;
    cart::add_to_cart(&ctx, 3, 1, Some(1)).await.unwrap();

    let confirmation = orders::checkout(&ctx, &shipping()).await.unwrap();

    assert!(cart::cart_summary(&ctx).items.is_empty());
    let history = orders::order_history(&ctx).await.unwrap();
    let order = history.iter().find(|o| o.id == confirmation.order_id).unwrap();
    assert_eq!(order.total, Money::from_cents(1_000));
    assert!(ctx.toasts.latest().unwrap().message.contains(&confirmation.order_id.to_string()));
}

#[tokio::test]
async fn incomplete_shipping_keeps_cart() {
    let ctx = customer_context().await;
    cart::add_to_cart(&ctx, 3, 1, Some(1)).await.unwrap();

    let err = orders::checkout(&ctx, &ShippingInfo::default()).await.unwrap_err();

    assert!(matches!(err, MarketError::Validation(_)));
    assert_eq!(cart::cart_summary(&ctx).total_items, 1);
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
    let ctx = customer_context().await;

    let err = orders::checkout(&ctx, &shipping()).await.unwrap_err();

    assert_eq!(err, MarketError::InvalidInput("Your cart is empty".into()));
}

#[tokio::test]
async fn return_request_refreshes_list() {
    let ctx = customer_context().await;

    let before = orders::returns(&ctx).await.unwrap().len();
    let after = orders::request_return(&ctx, 1001, 3, "Stopped working").await.unwrap();

    assert_eq!(after.len(), before + 1);
    assert_eq!(ctx.toasts.latest().unwrap().message, "Return request submitted successfully!");
}
