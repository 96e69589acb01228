//! Social feed types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::Money;

/// Product card embedded in a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PostProduct {
    pub name: String,
    pub price: Money,
    pub image_src: String,
    pub link: String,
}

/// Feed post with its engagement counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Post {
    pub id: u32,
    pub username: String,
    pub handle: String,
    pub content: String,
    pub avatar_src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<PostProduct>,
    pub comments: u32,
    pub reposts: u32,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Short age label ("2h", "3d") relative to `now`
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        crate::relative_time(self.created_at, now)
    }
}

/// Post composer submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NewPost {
    pub author: String,
    pub content: String,
}
