use async_trait::async_trait;
use marketfeed_core::AdminGateway;
use marketfeed_domain::{Ack, AdminUser, MarketError, Result, ShopStatus, ShopSummary};
use tracing::info;

use super::store::MockStore;
use super::{LatencyClass, MockBackend};

fn set_shop_status(store: &mut MockStore, shop_id: &str, status: ShopStatus) -> Result<()> {
    let shop = store
        .shop_summaries
        .iter_mut()
        .find(|s| s.id == shop_id)
        .ok_or_else(|| MarketError::not_found("shop", shop_id))?;
    shop.status = status;
    Ok(())
}

#[async_trait]
impl AdminGateway for MockBackend {
    async fn get_all_users(&self) -> Result<Vec<AdminUser>> {
        self.respond("get_all_users", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.users.clone()))
    }

    async fn ban_user(&self, user_id: &str) -> Result<Ack> {
        self.respond("ban_user", LatencyClass::Standard).await?;
        self.with_store(|store| {
            let user = store
                .users
                .iter_mut()
                .find(|u| u.id == user_id)
                .ok_or_else(|| MarketError::not_found("user", user_id))?;
            user.is_banned = true;
            Ok::<_, MarketError>(())
        })?;
        info!(user_id, "user_banned");
        Ok(Ack::new("User banned successfully!"))
    }

    async fn get_all_shops(&self) -> Result<Vec<ShopSummary>> {
        self.respond("get_all_shops", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.shop_summaries.clone()))
    }

    async fn approve_shop(&self, shop_id: &str) -> Result<Ack> {
        self.respond("approve_shop", LatencyClass::Standard).await?;
        self.with_store(|store| set_shop_status(store, shop_id, ShopStatus::Approved))?;
        info!(shop_id, "shop_approved");
        Ok(Ack::new("Shop approved successfully!"))
    }

    async fn suspend_shop(&self, shop_id: &str) -> Result<Ack> {
        self.respond("suspend_shop", LatencyClass::Standard).await?;
        self.with_store(|store| set_shop_status(store, shop_id, ShopStatus::Suspended))?;
        info!(shop_id, "shop_suspended");
        Ok(Ack::new("Shop suspended successfully!"))
    }
}
