use async_trait::async_trait;
use marketfeed_core::RewardsGateway;
use marketfeed_domain::{CoinBalance, LoyaltyStatus, Result, ShopLoyalty};

use super::{LatencyClass, MockBackend};

#[async_trait]
impl RewardsGateway for MockBackend {
    async fn get_loyalty_status(&self, _user_id: &str) -> Result<LoyaltyStatus> {
        self.respond("get_loyalty_status", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.loyalty.clone()))
    }

    async fn get_shop_loyalty_status(&self, _user_id: &str) -> Result<Vec<ShopLoyalty>> {
        self.respond("get_shop_loyalty_status", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.shop_loyalty.clone()))
    }

    async fn get_virtual_coin_balance(&self, _user_id: &str) -> Result<CoinBalance> {
        self.respond("get_virtual_coin_balance", LatencyClass::Coin).await?;
        Ok(self.with_store(|store| store.coins.clone()))
    }
}
