use async_trait::async_trait;
use chrono::Utc;
use marketfeed_core::OrderGateway;
use marketfeed_domain::{
    MarketError, Order, OrderConfirmation, OrderItem, OrderRequest, OrderStatus, Result,
    ReturnRequest, ReturnStatus, ReturnTicket,
};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl OrderGateway for MockBackend {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation> {
        self.respond("place_order", LatencyClass::Checkout).await?;
        if request.items.is_empty() {
            return Err(MarketError::InvalidInput("An order needs at least one item".to_string()));
        }
        let order_id = self.with_store(|store| {
            let id = store.next_id();
            store.orders.push(Order {
                id,
                date: Utc::now().date_naive(),
                total: request.total,
                status: OrderStatus::Pending,
                items: request
                    .items
                    .iter()
                    .map(|item| OrderItem {
                        product_id: item.product_id,
                        name: item.name.clone(),
                        quantity: item.quantity,
                        price: item.price,
                    })
                    .collect(),
            });
            id
        });
        info!(
            order_id,
            customer = %request.customer,
            lines = request.items.len(),
            total_cents = request.total.cents(),
            "order_received"
        );
        Ok(OrderConfirmation { message: "Order placed successfully!".to_string(), order_id })
    }

    async fn get_orders(&self) -> Result<Vec<Order>> {
        self.respond("get_orders", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.orders.clone()))
    }

    async fn request_return(
        &self,
        order_id: u32,
        product_id: u32,
        reason: &str,
    ) -> Result<ReturnTicket> {
        self.respond("request_return", LatencyClass::Standard).await?;
        let request_id = self.with_store(|store| {
            let order = store
                .orders
                .iter()
                .find(|o| o.id == order_id)
                .ok_or_else(|| MarketError::not_found("order", order_id))?;
            let item = order.items.iter().find(|i| i.product_id == product_id).ok_or_else(|| {
                MarketError::InvalidInput(format!(
                    "Product {product_id} is not part of order {order_id}"
                ))
            })?;
            let product_name = item.name.clone();

            let id = store.next_id();
            store.returns.push(ReturnRequest {
                id,
                order_id,
                product_id,
                product_name,
                reason: reason.trim().to_string(),
                status: ReturnStatus::Pending,
                date_requested: Utc::now().date_naive(),
            });
            Ok::<_, MarketError>(id)
        })?;
        info!(request_id, order_id, product_id, "return_request_received");
        Ok(ReturnTicket {
            message: "Return request submitted successfully!".to_string(),
            request_id,
        })
    }

    async fn get_returns(&self) -> Result<Vec<ReturnRequest>> {
        self.respond("get_returns", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.returns.clone()))
    }
}
