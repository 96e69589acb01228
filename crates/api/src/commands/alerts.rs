//! Stock alert commands

use marketfeed_domain::{Result, StockAlert};

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn stock_alerts(ctx: &AppContext) -> Result<Vec<StockAlert>> {
    execute_command(ctx, "alerts::stock_alerts", move || ctx.alerts.list()).await
}

pub async fn subscribe_to_stock_alert(ctx: &AppContext, product_id: u32) -> Result<Vec<StockAlert>> {
    execute_command(ctx, "alerts::subscribe_to_stock_alert", move || async move {
        let alerts = ctx.alerts.subscribe(product_id).await?;
        ctx.toasts.success(format!("Subscribed to stock alerts for product {product_id}"));
        Ok(alerts)
    })
    .await
}
