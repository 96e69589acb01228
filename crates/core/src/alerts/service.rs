//! Stock alert page

use std::sync::Arc;

use marketfeed_domain::{Result, StockAlert};
use tracing::info;

use super::ports::StockAlertGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

pub struct StockAlertService {
    gateway: Arc<dyn StockAlertGateway>,
    auth: Arc<AuthStore>,
}

impl StockAlertService {
    pub fn new(gateway: Arc<dyn StockAlertGateway>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, auth }
    }

    pub async fn list(&self) -> Result<Vec<StockAlert>> {
        let user = self.auth.require_user()?;
        self.gateway.get_subscribed_stock_alerts(&user.id).await
    }

    /// Subscribe and return the refreshed list
    pub async fn subscribe(&self, product_id: u32) -> Result<Vec<StockAlert>> {
        let user = self.auth.require_user()?;
        validate(|v| {
            v.greater_than("product_id", product_id, 0);
        })?;
        self.gateway.subscribe_to_stock_alerts(product_id, &user.id).await?;
        info!(product_id, user_id = %user.id, "stock_alert_subscribed");
        self.gateway.get_subscribed_stock_alerts(&user.id).await
    }
}
