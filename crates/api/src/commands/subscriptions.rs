//! Subscription plan commands

use marketfeed_core::SubscriptionOverview;
use marketfeed_domain::Result;

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn subscription_overview(ctx: &AppContext) -> Result<SubscriptionOverview> {
    execute_command(ctx, "subscriptions::subscription_overview", move || ctx.subscriptions.overview())
        .await
}

pub async fn subscribe_to_plan(ctx: &AppContext, plan_id: u32) -> Result<SubscriptionOverview> {
    execute_command(ctx, "subscriptions::subscribe_to_plan", move || async move {
        let overview = ctx.subscriptions.subscribe(plan_id).await?;
        ctx.toasts.success("Subscribed successfully!");
        Ok(overview)
    })
    .await
}

pub async fn cancel_subscription(
    ctx: &AppContext,
    subscription_id: u32,
) -> Result<SubscriptionOverview> {
    execute_command(ctx, "subscriptions::cancel_subscription", move || async move {
        let overview = ctx.subscriptions.cancel(subscription_id).await?;
        ctx.toasts.success("Subscription cancelled successfully!");
        Ok(overview)
    })
    .await
}
