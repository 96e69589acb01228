//! Notification list view model

use std::sync::Arc;

use marketfeed_domain::{Notification, NotificationKind, Result};

use super::ports::NotificationGateway;
use crate::session::AuthStore;

pub struct NotificationCenter {
    gateway: Arc<dyn NotificationGateway>,
    auth: Arc<AuthStore>,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(gateway: Arc<dyn NotificationGateway>, auth: Arc<AuthStore>) -> Self {
        Self { gateway, auth, notifications: Vec::new() }
    }

    pub async fn load(&mut self) -> Result<&[Notification]> {
        let user = self.auth.require_user()?;
        self.notifications = self.gateway.get_notifications(&user.id).await?;
        Ok(&self.notifications)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn by_kind(&self, kind: NotificationKind) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(move |n| n.kind == kind)
    }

    /// Mark one notification read, locally after the backend accepts
    pub async fn mark_as_read(&mut self, notification_id: u32) -> Result<()> {
        self.gateway.mark_notification_as_read(notification_id).await?;
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == notification_id) {
            n.read = true;
        }
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
