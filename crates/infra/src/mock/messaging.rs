use async_trait::async_trait;
use chrono::Local;
use marketfeed_core::MessagingGateway;
use marketfeed_domain::{Ack, Conversation, MarketError, Message, Result};
use tracing::info;

use super::{LatencyClass, MockBackend};

#[async_trait]
impl MessagingGateway for MockBackend {
    async fn get_conversations(&self) -> Result<Vec<Conversation>> {
        self.respond("get_conversations", LatencyClass::Standard).await?;
        Ok(self.with_store(|store| store.conversations.clone()))
    }

    async fn get_messages(&self, conversation_id: u32) -> Result<Vec<Message>> {
        self.respond("get_messages", LatencyClass::Standard).await?;
        self.with_store(|store| {
            store
                .messages
                .get(&conversation_id)
                .cloned()
                .ok_or_else(|| MarketError::not_found("conversation", conversation_id))
        })
    }

    async fn send_message(
        &self,
        conversation_id: u32,
        sender: &str,
        content: &str,
    ) -> Result<Ack> {
        self.respond("send_message", LatencyClass::Messaging).await?;
        let timestamp = Local::now().format("%-I:%M %p").to_string();
        let content = content.trim().to_string();
        let message_id = self.with_store(|store| {
            let thread = store
                .messages
                .get_mut(&conversation_id)
                .ok_or_else(|| MarketError::not_found("conversation", conversation_id))?;
            let id = thread.iter().map(|m| m.id).max().unwrap_or(0) + 1;
            thread.push(Message {
                id,
                sender: sender.to_string(),
                content: content.clone(),
                timestamp: timestamp.clone(),
            });
            if let Some(conversation) =
                store.conversations.iter_mut().find(|c| c.id == conversation_id)
            {
                conversation.last_message = content;
                conversation.last_message_time = timestamp;
            }
            Ok::<_, MarketError>(id)
        })?;
        info!(conversation_id, message_id, sender, "message_stored");
        Ok(Ack::new("Message sent successfully!"))
    }
}
