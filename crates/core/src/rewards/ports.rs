//! Port interfaces for loyalty points and virtual coins

use async_trait::async_trait;
use marketfeed_domain::{CoinBalance, LoyaltyStatus, Result, ShopLoyalty};

#[async_trait]
pub trait RewardsGateway: Send + Sync {
    async fn get_loyalty_status(&self, user_id: &str) -> Result<LoyaltyStatus>;

    async fn get_shop_loyalty_status(&self, user_id: &str) -> Result<Vec<ShopLoyalty>>;

    async fn get_virtual_coin_balance(&self, user_id: &str) -> Result<CoinBalance>;
}
