//! Subscription plans page

use std::sync::Arc;

use marketfeed_domain::{MarketError, Result, SubscriptionPlan, UserSubscription};
use tracing::info;

use super::ports::SubscriptionGateway;
use crate::session::AuthStore;

/// Available plans next to the user's own subscriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionOverview {
    pub plans: Vec<SubscriptionPlan>,
    pub subscriptions: Vec<UserSubscription>,
}

impl SubscriptionOverview {
    /// Whether the user already has an active subscription to `plan_id`
    pub fn is_subscribed(&self, plan_id: u32) -> bool {
        self.subscriptions.iter().any(|s| s.plan_id == plan_id && s.is_active())
    }
}

pub struct SubscriptionService {
    gateway: Arc<dyn SubscriptionGateway>,
    auth: Arc<AuthStore>,
}

impl SubscriptionService {
    pub fn new(gateway: Arc<dyn SubscriptionGateway>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, auth }
    }

    pub async fn overview(&self) -> Result<SubscriptionOverview> {
        let user = self.auth.require_user()?;
        let (plans, subscriptions) = futures::try_join!(
            self.gateway.get_available_subscription_plans(),
            self.gateway.get_subscriptions(&user.id),
        )?;
        Ok(SubscriptionOverview { plans, subscriptions })
    }

    pub async fn subscribe(&self, plan_id: u32) -> Result<SubscriptionOverview> {
        let user = self.auth.require_user()?;
        let current = self.overview().await?;
        if current.is_subscribed(plan_id) {
            return Err(MarketError::InvalidInput(
                "You are already subscribed to this plan".to_string(),
            ));
        }
        self.gateway.subscribe_to_plan(&user.id, plan_id).await?;
        info!(plan_id, user_id = %user.id, "plan_subscribed");
        self.overview().await
    }

    pub async fn cancel(&self, subscription_id: u32) -> Result<SubscriptionOverview> {
        let user = self.auth.require_user()?;
        self.gateway.cancel_subscription(&user.id, subscription_id).await?;
        info!(subscription_id, user_id = %user.id, "subscription_cancelled");
        self.overview().await
    }
}
