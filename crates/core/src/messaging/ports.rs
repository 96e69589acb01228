//! Port interfaces for direct messages

use async_trait::async_trait;
use marketfeed_domain::{Ack, Conversation, Message, Result};

#[async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn get_conversations(&self) -> Result<Vec<Conversation>>;

    async fn get_messages(&self, conversation_id: u32) -> Result<Vec<Message>>;

    async fn send_message(&self, conversation_id: u32, sender: &str, content: &str)
        -> Result<Ack>;
}
