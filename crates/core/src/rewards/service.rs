//! Loyalty page

use std::sync::Arc;

use marketfeed_domain::{CoinBalance, LoyaltyStatus, Result, ShopLoyalty};

use super::ports::RewardsGateway;
use crate::session::AuthStore;

/// Everything the loyalty page shows for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardsDashboard {
    pub loyalty: LoyaltyStatus,
    pub shops: Vec<ShopLoyalty>,
    pub coins: CoinBalance,
}

impl RewardsDashboard {
    /// Platform plus per-shop points
    pub fn total_points(&self) -> u32 {
        self.shops.iter().fold(self.loyalty.points, |acc, s| acc.saturating_add(s.points))
    }
}

pub struct RewardsService {
    gateway: Arc<dyn RewardsGateway>,
    auth: Arc<AuthStore>,
}

impl RewardsService {
    pub fn new(gateway: Arc<dyn RewardsGateway>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, auth }
    }

    /// Load loyalty, shop loyalty and coins concurrently
    pub async fn dashboard(&self) -> Result<RewardsDashboard> {
        let user = self.auth.require_user()?;
        let (loyalty, shops, coins) = futures::try_join!(
            self.gateway.get_loyalty_status(&user.id),
            self.gateway.get_shop_loyalty_status(&user.id),
            self.gateway.get_virtual_coin_balance(&user.id),
        )?;
        Ok(RewardsDashboard { loyalty, shops, coins })
    }

    pub async fn coin_balance(&self) -> Result<CoinBalance> {
        let user = self.auth.require_user()?;
        self.gateway.get_virtual_coin_balance(&user.id).await
    }
}
