//! Checkout: cart plus shipping form into a placed order

use std::sync::Arc;

use marketfeed_domain::{MarketError, OrderConfirmation, OrderRequest, Result, ShippingInfo};
use tracing::{info, warn};

use super::ports::OrderGateway;
use crate::cart::CartStore;
use crate::session::AuthStore;
use crate::utils::validation::validate;

pub struct CheckoutService {
    gateway: Arc<dyn OrderGateway>,
    cart: Arc<CartStore>,
    auth: Arc<AuthStore>,
}

impl CheckoutService {
    pub fn new(gateway: Arc<dyn OrderGateway>, cart: Arc<CartStore>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, cart, auth }
    }

    /// Place an order for the whole cart.
    ///
    /// The cart is cleared only once the backend confirms; any failure
    /// leaves it exactly as it was.
    pub async fn place_order(&self, shipping: &ShippingInfo) -> Result<OrderConfirmation> {
        if self.cart.is_empty() {
            return Err(MarketError::InvalidInput("Your cart is empty".to_string()));
        }
        validate(|v| {
            v.require_text("full_name", &shipping.full_name)
                .require_text("address", &shipping.address)
                .require_text("city", &shipping.city)
                .require_text("zip_code", &shipping.zip_code)
                .require_text("country", &shipping.country);
        })
        .map_err(|_| {
            MarketError::Validation("Please fill in all shipping information fields.".to_string())
        })?;

        let customer =
            self.auth.current_user().map_or_else(|| "Guest".to_string(), |u| u.username);
        let request = OrderRequest {
            customer,
            items: self.cart.items(),
            shipping: shipping.clone(),
            total: self.cart.total_price(),
        };

        match self.gateway.place_order(&request).await {
            Ok(confirmation) => {
                self.cart.clear();
                info!(
                    order_id = confirmation.order_id,
                    lines = request.items.len(),
                    total_cents = request.total.cents(),
                    "order_placed"
                );
                Ok(confirmation)
            }
            Err(err) => {
                warn!(error = %err, "order_failed");
                Err(err)
            }
        }
    }
}
