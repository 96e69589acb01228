//! Back-in-stock alert types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum AlertStatus {
    Active,
    Notified,
}

impl_domain_status_conversions!(AlertStatus {
    Active => "Active",
    Notified => "Notified",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StockAlert {
    pub id: u32,
    pub product_id: u32,
    pub product_name: String,
    pub status: AlertStatus,
}
