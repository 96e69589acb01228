//! Port interfaces for paid subscriptions

use async_trait::async_trait;
use marketfeed_domain::{Ack, Result, SubscriptionPlan, UserSubscription};

#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    async fn get_available_subscription_plans(&self) -> Result<Vec<SubscriptionPlan>>;

    async fn get_subscriptions(&self, user_id: &str) -> Result<Vec<UserSubscription>>;

    async fn subscribe_to_plan(&self, user_id: &str, plan_id: u32) -> Result<Ack>;

    async fn cancel_subscription(&self, user_id: &str, subscription_id: u32) -> Result<Ack>;
}
