//! Seller dashboard commands
//!
//! The dashboard is opened for one shop with [`open_shop_dashboard`]; the
//! other commands act on that shop and return the refreshed snapshot.

use marketfeed_core::ShopDashboard;
use marketfeed_domain::{
    MarketError, OrderStatus, Result, ShopInfo, ShopOrder, ShopProduct, ShopProductDraft,
    ShopProductPatch,
};
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::execute_command;

/// What the seller dashboard renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopSnapshot {
    pub shop_id: String,
    pub info: ShopInfo,
    pub products: Vec<ShopProduct>,
    pub orders: Vec<ShopOrder>,
}

impl From<&ShopDashboard> for ShopSnapshot {
    fn from(dashboard: &ShopDashboard) -> Self {
        Self {
            shop_id: dashboard.shop_id().to_string(),
            info: dashboard.info().clone(),
            products: dashboard.products().to_vec(),
            orders: dashboard.orders().to_vec(),
        }
    }
}

fn not_open() -> MarketError {
    MarketError::InvalidInput("Open the shop dashboard first".to_string())
}

/// Load info, products and orders for `shop_id`
pub async fn open_shop_dashboard(ctx: &AppContext, shop_id: &str) -> Result<ShopSnapshot> {
    execute_command(ctx, "shop::open_shop_dashboard", move || async move {
        let mut dashboard =
            ShopDashboard::new(ctx.gateways.shop.clone(), ctx.auth.clone(), shop_id);
        dashboard.load().await?;
        let snapshot = ShopSnapshot::from(&dashboard);
        *ctx.shop_dashboard.lock().await = Some(dashboard);
        Ok(snapshot)
    })
    .await
}

pub async fn update_shop_info(ctx: &AppContext, info: ShopInfo) -> Result<ShopSnapshot> {
    execute_command(ctx, "shop::update_shop_info", move || async move {
        let mut guard = ctx.shop_dashboard.lock().await;
        let dashboard = guard.as_mut().ok_or_else(not_open)?;
        dashboard.update_info(info).await?;
        ctx.toasts.success("Shop information updated successfully!");
        Ok(ShopSnapshot::from(&*dashboard))
    })
    .await
}

pub async fn add_shop_product(ctx: &AppContext, draft: ShopProductDraft) -> Result<ShopSnapshot> {
    execute_command(ctx, "shop::add_shop_product", move || async move {
        let mut guard = ctx.shop_dashboard.lock().await;
        let dashboard = guard.as_mut().ok_or_else(not_open)?;
        dashboard.add_product(draft).await?;
        ctx.toasts.success("Product added successfully!");
        Ok(ShopSnapshot::from(&*dashboard))
    })
    .await
}

pub async fn update_shop_product(
    ctx: &AppContext,
    product_id: u32,
    patch: ShopProductPatch,
) -> Result<ShopSnapshot> {
    execute_command(ctx, "shop::update_shop_product", move || async move {
        let mut guard = ctx.shop_dashboard.lock().await;
        let dashboard = guard.as_mut().ok_or_else(not_open)?;
        dashboard.update_product(product_id, patch).await?;
        ctx.toasts.success("Product updated successfully!");
        Ok(ShopSnapshot::from(&*dashboard))
    })
    .await
}

pub async fn delete_shop_product(ctx: &AppContext, product_id: u32) -> Result<ShopSnapshot> {
    execute_command(ctx, "shop::delete_shop_product", move || async move {
        let mut guard = ctx.shop_dashboard.lock().await;
        let dashboard = guard.as_mut().ok_or_else(not_open)?;
        dashboard.delete_product(product_id).await?;
        ctx.toasts.success("Product deleted successfully!");
        Ok(ShopSnapshot::from(&*dashboard))
    })
    .await
}

pub async fn update_shop_order_status(
    ctx: &AppContext,
    order_id: u32,
    status: OrderStatus,
) -> Result<ShopSnapshot> {
    execute_command(ctx, "shop::update_shop_order_status", move || async move {
        let mut guard = ctx.shop_dashboard.lock().await;
        let dashboard = guard.as_mut().ok_or_else(not_open)?;
        dashboard.update_order_status(order_id, status).await?;
        ctx.toasts.success(format!("Order {order_id} status updated to {status}"));
        Ok(ShopSnapshot::from(&*dashboard))
    })
    .await
}
