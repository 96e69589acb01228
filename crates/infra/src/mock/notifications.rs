use async_trait::async_trait;
use marketfeed_core::NotificationGateway;
use marketfeed_domain::{Ack, MarketError, Notification, Result};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl NotificationGateway for MockBackend {
    async fn get_notifications(&self, _user_id: &str) -> Result<Vec<Notification>> {
        self.respond("get_notifications", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.notifications.clone()))
    }

    async fn mark_notification_as_read(&self, notification_id: u32) -> Result<Ack> {
        self.respond("mark_notification_as_read", LatencyClass::Quick).await?;
        self.with_store(|store| {
            let notification = store
                .notifications
                .iter_mut()
                .find(|n| n.id == notification_id)
                .ok_or_else(|| MarketError::not_found("notification", notification_id))?;
            notification.read = true;
            Ok::<_, MarketError>(())
        })?;
        info!(notification_id, "notification_read");
        Ok(Ack::new("Notification marked as read."))
    }
}
