//! Auction types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::Money;

/// Auction card in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Auction {
    pub id: u32,
    pub name: String,
    pub current_bid: Money,
    pub end_time: DateTime<Utc>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Bid {
    pub bidder: String,
    pub amount: Money,
    pub time: DateTime<Utc>,
}

/// Auction page: description plus full bid history, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AuctionDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub current_bid: Money,
    pub end_time: DateTime<Utc>,
    pub image: String,
    pub bid_history: Vec<Bid>,
}

impl AuctionDetail {
    pub fn summary(&self) -> Auction {
        Auction {
            id: self.id,
            name: self.name.clone(),
            current_bid: self.current_bid,
            end_time: self.end_time,
            image: self.image.clone(),
        }
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }
}
