//! Cart commands

use marketfeed_core::CartLineSelector;
use marketfeed_domain::{CartItem, Money, Result};
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::execute_command;

/// What the cart page and header badge render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: Money,
}

pub fn cart_summary(ctx: &AppContext) -> CartSummary {
    CartSummary {
        items: ctx.cart.items(),
        total_items: ctx.cart.total_items(),
        total_price: ctx.cart.total_price(),
    }
}

/// Load the product, resolve the chosen seller and variation, add one unit
pub async fn add_to_cart(
    ctx: &AppContext,
    product_id: u32,
    seller_id: u32,
    variation_id: Option<u32>,
) -> Result<CartItem> {
    execute_command(ctx, "cart::add_to_cart", move || async move {
        let detail = ctx.catalog.product(product_id).await?;
        let item = ctx.catalog.add_to_cart(&detail, seller_id, variation_id)?;
        ctx.toasts.success(format!("{} added to cart!", item.name));
        Ok(item)
    })
    .await
}

pub fn remove_from_cart(ctx: &AppContext, selector: &CartLineSelector) -> CartSummary {
    ctx.cart.remove(selector);
    cart_summary(ctx)
}

/// Zero or negative quantities remove the line
pub fn update_cart_quantity(
    ctx: &AppContext,
    selector: &CartLineSelector,
    quantity: i64,
) -> CartSummary {
    ctx.cart.update_quantity(selector, quantity);
    cart_summary(ctx)
}

pub fn clear_cart(ctx: &AppContext) {
    ctx.cart.clear();
}
