//! Order history and return requests

use std::sync::Arc;

use marketfeed_domain::{Order, Result, ReturnRequest};
use tracing::info;

use super::ports::OrderGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

pub struct OrderService {
    gateway: Arc<dyn OrderGateway>,
    auth: Arc<AuthStore>,
}

impl OrderService {
    pub fn new(gateway: Arc<dyn OrderGateway>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, auth }
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.auth.require_user()?;
        self.gateway.get_orders().await
    }

    /// Orders whose status allows a return
    pub async fn returnable_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders().await?.into_iter().filter(|o| o.status.is_returnable()).collect())
    }

    pub async fn returns(&self) -> Result<Vec<ReturnRequest>> {
        self.auth.require_user()?;
        self.gateway.get_returns().await
    }

    /// Submit a return and reload the list
    pub async fn request_return(
        &self,
        order_id: u32,
        product_id: u32,
        reason: &str,
    ) -> Result<Vec<ReturnRequest>> {
        self.auth.require_user()?;
        validate(|v| {
            v.greater_than("order_id", order_id, 0)
                .greater_than("product_id", product_id, 0)
                .require_text("reason", reason);
        })?;

        let ticket = self.gateway.request_return(order_id, product_id, reason.trim()).await?;
        info!(request_id = ticket.request_id, order_id, product_id, "return_requested");
        self.gateway.get_returns().await
    }
}
