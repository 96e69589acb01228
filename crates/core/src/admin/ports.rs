//! Port interfaces for platform administration

use async_trait::async_trait;
use marketfeed_domain::{Ack, AdminUser, Result, ShopSummary};

/// Moderation endpoints of the backend
#[async_trait]
pub trait AdminGateway: Send + Sync {
    async fn get_all_users(&self) -> Result<Vec<AdminUser>>;

    async fn ban_user(&self, user_id: &str) -> Result<Ack>;

    async fn get_all_shops(&self) -> Result<Vec<ShopSummary>>;

    async fn approve_shop(&self, shop_id: &str) -> Result<Ack>;

    async fn suspend_shop(&self, shop_id: &str) -> Result<Ack>;
}
