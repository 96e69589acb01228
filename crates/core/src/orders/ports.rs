//! Port interfaces for orders and returns

use async_trait::async_trait;
use marketfeed_domain::{Order, OrderConfirmation, OrderRequest, Result, ReturnRequest, ReturnTicket};

/// Order endpoints of the backend. The cart itself never leaves the client.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation>;

    async fn get_orders(&self) -> Result<Vec<Order>>;

    async fn request_return(
        &self,
        order_id: u32,
        product_id: u32,
        reason: &str,
    ) -> Result<ReturnTicket>;

    async fn get_returns(&self) -> Result<Vec<ReturnRequest>>;
}
