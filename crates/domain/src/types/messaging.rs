//! Direct messaging types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Inbox row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Conversation {
    pub id: u32,
    pub participant: String,
    pub last_message: String,
    /// Display label such as `10:30 AM` or `Yesterday`
    pub last_message_time: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub content: String,
    pub timestamp: String,
}
