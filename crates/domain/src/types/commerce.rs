//! Cart, checkout, order and return types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::Money;
use crate::impl_domain_status_conversions;

/// Identity of a cart line: the same product bought as a different
/// variation or from a different seller is a separate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CartLineKey {
    pub product_id: u32,
    pub variation_id: Option<u32>,
    pub seller_id: Option<u32>,
}

impl CartLineKey {
    pub fn product(product_id: u32) -> Self {
        Self { product_id, variation_id: None, seller_id: None }
    }

    #[must_use]
    pub fn with_variation(mut self, variation_id: u32) -> Self {
        self.variation_id = Some(variation_id);
        self
    }

    #[must_use]
    pub fn with_seller(mut self, seller_id: u32) -> Self {
        self.seller_id = Some(seller_id);
        self
    }
}

/// One cart line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CartItem {
    pub product_id: u32,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub variation_id: Option<u32>,
    pub seller_id: Option<u32>,
    pub quantity: u32,
}

impl CartItem {
    pub fn key(&self) -> CartLineKey {
        CartLineKey {
            product_id: self.product_id,
            variation_id: self.variation_id,
            seller_id: self.seller_id,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// Shipping form; every field is required at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShippingInfo {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// Checkout submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct OrderRequest {
    pub customer: String,
    pub items: Vec<CartItem>,
    pub shipping: ShippingInfo,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct OrderConfirmation {
    pub message: String,
    pub order_id: u32,
}

/// Lifecycle of a customer or shop order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

impl_domain_status_conversions!(OrderStatus {
    Pending => "Pending",
    Processing => "Processing",
    Shipped => "Shipped",
    Delivered => "Delivered",
    Completed => "Completed",
    Cancelled => "Cancelled",
});

impl OrderStatus {
    /// Delivered or completed orders are eligible for a return request
    pub fn is_returnable(self) -> bool {
        matches!(self, Self::Delivered | Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct OrderItem {
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: Money,
}

/// Customer order history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Order {
    pub id: u32,
    pub date: NaiveDate,
    pub total: Money,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ReturnStatus {
    Pending,
    Approved,
    Rejected,
}

impl_domain_status_conversions!(ReturnStatus {
    Pending => "Pending",
    Approved => "Approved",
    Rejected => "Rejected",
});

/// A return request as listed on the returns page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReturnRequest {
    pub id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub product_name: String,
    pub reason: String,
    pub status: ReturnStatus,
    pub date_requested: NaiveDate,
}

/// Acknowledgement of a submitted return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReturnTicket {
    pub message: String,
    pub request_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_reflects_variation_and_seller() {
        let item = CartItem {
            product_id: 7,
            name: "Product 7 (Small)".into(),
            price: Money::from_cents(1_000),
            image: String::new(),
            variation_id: Some(1),
            seller_id: Some(2),
            quantity: 3,
        };

        assert_eq!(item.key(), CartLineKey::product(7).with_variation(1).with_seller(2));
        assert_eq!(item.line_total(), Money::from_cents(3_000));
    }

    #[test]
    fn order_status_parses_fixture_strings() {
        assert_eq!("Delivered".parse::<OrderStatus>(), Ok(OrderStatus::Delivered));
        assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert!(OrderStatus::Delivered.is_returnable());
        assert!(!OrderStatus::Pending.is_returnable());
    }
}
