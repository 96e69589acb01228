//! Seller shop management types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::{Money, OrderStatus};
use crate::impl_domain_status_conversions;

/// Shop storefront details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopInfo {
    pub name: String,
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopProduct {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub image: String,
}

/// New shop listing as entered by the seller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopProductDraft {
    pub name: String,
    pub price: Money,
    /// Signed so a negative form entry can be rejected rather than wrapped
    pub stock: i64,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<u32>,
    pub image: Option<String>,
}

impl ShopProductPatch {
    pub fn apply_to(&self, product: &mut ShopProduct) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image) = &self.image {
            product.image.clone_from(image);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopOrderItem {
    pub name: String,
    pub quantity: u32,
}

/// Order received by a shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopOrder {
    pub id: u32,
    pub customer_name: String,
    pub total: Money,
    pub status: OrderStatus,
    pub items: Vec<ShopOrderItem>,
}

/// Moderation state of a shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ShopStatus {
    Pending,
    Approved,
    Suspended,
}

impl_domain_status_conversions!(ShopStatus {
    Pending => "Pending",
    Approved => "Approved",
    Suspended => "Suspended",
});

/// Shop row in the admin console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopSummary {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub status: ShopStatus,
}
