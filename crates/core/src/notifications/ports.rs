//! Port interfaces for notifications

use async_trait::async_trait;
use marketfeed_domain::{Ack, Notification, Result};

#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    async fn mark_notification_as_read(&self, notification_id: u32) -> Result<Ack>;
}
