//! Checkout, order history and return commands

use marketfeed_domain::{Order, OrderConfirmation, Result, ReturnRequest, ShippingInfo};

use crate::context::AppContext;
use crate::utils::execute_command;

/// Place an order for the whole cart; the cart is cleared only on success
pub async fn checkout(ctx: &AppContext, shipping: &ShippingInfo) -> Result<OrderConfirmation> {
    execute_command(ctx, "orders::checkout", move || async move {
        let confirmation = ctx.checkout.place_order(shipping).await?;
        ctx.toasts.success(format!("{} Order ID: {}", confirmation.message, confirmation.order_id));
        Ok(confirmation)
    })
    .await
}

pub async fn order_history(ctx: &AppContext) -> Result<Vec<Order>> {
    execute_command(ctx, "orders::order_history", move || ctx.orders.orders()).await
}

/// Orders eligible for the return form
pub async fn returnable_orders(ctx: &AppContext) -> Result<Vec<Order>> {
    execute_command(ctx, "orders::returnable_orders", move || ctx.orders.returnable_orders()).await
}

pub async fn returns(ctx: &AppContext) -> Result<Vec<ReturnRequest>> {
    execute_command(ctx, "orders::returns", move || ctx.orders.returns()).await
}

pub async fn request_return(
    ctx: &AppContext,
    order_id: u32,
    product_id: u32,
    reason: &str,
) -> Result<Vec<ReturnRequest>> {
    execute_command(ctx, "orders::request_return", move || async move {
        let returns = ctx.orders.request_return(order_id, product_id, reason).await?;
        ctx.toasts.success("Return request submitted successfully!");
        Ok(returns)
    })
    .await
}
