//! Platform administration types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::UserRole;

/// Account row in the admin console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_banned: bool,
}
