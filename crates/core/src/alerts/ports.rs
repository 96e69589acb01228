//! Port interfaces for back-in-stock alerts

use async_trait::async_trait;
use marketfeed_domain::{Ack, Result, StockAlert};

#[async_trait]
pub trait StockAlertGateway: Send + Sync {
    async fn subscribe_to_stock_alerts(&self, product_id: u32, user_id: &str) -> Result<Ack>;

    async fn get_subscribed_stock_alerts(&self, user_id: &str) -> Result<Vec<StockAlert>>;
}
