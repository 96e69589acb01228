use async_trait::async_trait;
use marketfeed_core::StockAlertGateway;
use marketfeed_domain::{Ack, AlertStatus, Result, StockAlert};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl StockAlertGateway for MockBackend {
    async fn subscribe_to_stock_alerts(&self, product_id: u32, user_id: &str) -> Result<Ack> {
        self.respond("subscribe_to_stock_alerts", LatencyClass::Standard).await?;
        let created = self.with_store(|store| {
            if store.stock_alerts.iter().any(|a| a.product_id == product_id) {
                return false;
            }
            let product_name = store
                .find_product(product_id)
                .map_or_else(|| format!("Product {product_id}"), |p| p.name.clone());
            let id = store.next_id();
            store.stock_alerts.push(StockAlert {
                id,
                product_id,
                product_name,
                status: AlertStatus::Active,
            });
            true
        });
        if created {
            info!(product_id, user_id, "stock_alert_created");
        }
        Ok(Ack::new("Subscribed to stock alerts successfully!"))
    }

    async fn get_subscribed_stock_alerts(&self, _user_id: &str) -> Result<Vec<StockAlert>> {
        self.respond("get_subscribed_stock_alerts", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.stock_alerts.clone()))
    }
}
