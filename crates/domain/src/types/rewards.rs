//! Loyalty programme and virtual coin types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::Money;
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl_domain_status_conversions!(LoyaltyTier {
    Bronze => "Bronze",
    Silver => "Silver",
    Gold => "Gold",
    Platinum => "Platinum",
});

/// Platform-wide loyalty standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LoyaltyStatus {
    pub points: u32,
    pub tier: LoyaltyTier,
    pub benefits: Vec<String>,
}

/// Loyalty standing with a single shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ShopLoyalty {
    pub shop_name: String,
    pub points: u32,
    pub tier: LoyaltyTier,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CoinBalance {
    pub balance: Money,
}
