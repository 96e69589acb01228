//! MarketFeed - social commerce client core
//!
//! Runs a scripted demo session against the mock backend: login, browse,
//! add to cart, checkout and like a post.

use anyhow::Context;
use marketfeed_domain::ShippingInfo;
use marketfeed_lib::commands::{cart, catalog, orders, session, social};
use marketfeed_lib::AppContext;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration so overrides apply
    let dotenv = dotenvy::dotenv();

    let config = marketfeed_infra::config::load().context("failed to load configuration")?;
    marketfeed_infra::init_tracing(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => info!(reason = %e, "No .env file loaded"),
    }

    info!("MarketFeed starting...");
    let ctx = AppContext::new(config);

    run_demo(&ctx).await.context("demo session failed")?;

    for toast in ctx.toasts.toasts() {
        info!(kind = %toast.kind, message = %toast.message, "toast");
    }
    info!("MarketFeed demo finished");
    Ok(())
}

async fn run_demo(ctx: &AppContext) -> marketfeed_domain::Result<()> {
    let user = session::login(ctx, "user@example.com", "password").await?;
    info!(username = %user.username, role = %user.role, "step: login");

    let showcase = catalog::showcase(ctx).await?;
    info!(
        new_arrivals = showcase.new_arrivals.len(),
        promotions = showcase.promotions.len(),
        popular = showcase.popular.len(),
        "step: browse"
    );

    let product_id = showcase.new_arrivals.first().map_or(1, |p| p.id);
    let item = cart::add_to_cart(ctx, product_id, 1, Some(1)).await?;
    let summary = cart::cart_summary(ctx);
    info!(
        item = %item.name,
        total_items = summary.total_items,
        total = %summary.total_price,
        "step: add to cart"
    );

    let shipping = ShippingInfo {
        full_name: user.username.clone(),
        address: "1 Market Street".to_string(),
        city: "Springfield".to_string(),
        zip_code: "12345".to_string(),
        country: "USA".to_string(),
    };
    let confirmation = orders::checkout(ctx, &shipping).await?;
    info!(order_id = confirmation.order_id, "step: checkout");

    let posts = social::load_feed(ctx).await?;
    match posts.first() {
        Some(post) => {
            let state = social::toggle_like(ctx, post.id).await?;
            info!(post_id = post.id, likes = state.likes, liked = state.liked, "step: like");
        }
        None => warn!("step: like skipped, feed is empty"),
    }

    Ok(())
}
