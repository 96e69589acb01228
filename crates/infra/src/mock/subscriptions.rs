use async_trait::async_trait;
use chrono::{Months, Utc};
use marketfeed_core::SubscriptionGateway;
use marketfeed_domain::{
    Ack, MarketError, Result, SubscriptionPlan, SubscriptionStatus, UserSubscription,
};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl SubscriptionGateway for MockBackend {
    async fn get_available_subscription_plans(&self) -> Result<Vec<SubscriptionPlan>> {
        self.respond("get_available_subscription_plans", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.plans.clone()))
    }

    async fn get_subscriptions(&self, _user_id: &str) -> Result<Vec<UserSubscription>> {
        self.respond("get_subscriptions", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.subscriptions.clone()))
    }

    async fn subscribe_to_plan(&self, user_id: &str, plan_id: u32) -> Result<Ack> {
        self.respond("subscribe_to_plan", LatencyClass::Standard).await?;
        let today = Utc::now().date_naive();
        let subscription_id = self.with_store(|store| {
            let plan_name = store
                .plans
                .iter()
                .find(|p| p.id == plan_id)
                .map(|p| p.name.clone())
                .ok_or_else(|| MarketError::not_found("plan", plan_id))?;
            let id = store.next_id();
            store.subscriptions.push(UserSubscription {
                id,
                plan_id,
                plan_name,
                status: SubscriptionStatus::Active,
                start_date: today,
                end_date: today.checked_add_months(Months::new(12)).unwrap_or(today),
            });
            Ok::<_, MarketError>(id)
        })?;
        info!(user_id, plan_id, subscription_id, "plan_subscription_created");
        Ok(Ack::new("Subscribed successfully!"))
    }

    async fn cancel_subscription(&self, user_id: &str, subscription_id: u32) -> Result<Ack> {
        self.respond("cancel_subscription", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let subscription = store
                .subscriptions
                .iter_mut()
                .find(|s| s.id == subscription_id)
                .ok_or_else(|| MarketError::not_found("subscription", subscription_id))?;
            subscription.status = SubscriptionStatus::Cancelled;
            Ok::<_, MarketError>(())
        })?;
        info!(user_id, subscription_id, "plan_subscription_cancelled");
        Ok(Ack::new("Subscription cancelled successfully!"))
    }
}
