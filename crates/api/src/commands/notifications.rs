//! Notification center commands

use marketfeed_domain::{Notification, Result};

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn load_notifications(ctx: &AppContext) -> Result<Vec<Notification>> {
    execute_command(ctx, "notifications::load_notifications", move || async move {
        let mut center = ctx.notifications.lock().await;
        let notifications = center.load().await?.to_vec();
        Ok(notifications)
    })
    .await
}

/// Mark one notification read; returns the new unread count
pub async fn mark_notification_as_read(ctx: &AppContext, notification_id: u32) -> Result<usize> {
    execute_command(ctx, "notifications::mark_notification_as_read", move || async move {
        let mut center = ctx.notifications.lock().await;
        center.mark_as_read(notification_id).await?;
        Ok(center.unread_count())
    })
    .await
}

pub async fn unread_count(ctx: &AppContext) -> usize {
    ctx.notifications.lock().await.unread_count()
}
