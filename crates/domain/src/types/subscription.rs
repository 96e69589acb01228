//! Paid subscription plan types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::Money;
use crate::impl_domain_status_conversions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SubscriptionPlan {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Expired,
}

impl_domain_status_conversions!(SubscriptionStatus {
    Active => "Active",
    Cancelled => "Cancelled",
    Expired => "Expired",
});

/// A plan the user has subscribed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UserSubscription {
    pub id: u32,
    pub plan_id: u32,
    pub plan_name: String,
    pub status: SubscriptionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl UserSubscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}
