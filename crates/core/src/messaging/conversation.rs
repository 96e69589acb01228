//! Inbox and open-thread view model

use std::sync::Arc;

use chrono::Local;
use marketfeed_domain::{Conversation, MarketError, Message, Result};
use tracing::debug;

use super::ports::MessagingGateway;
use crate::session::AuthStore;
use crate::utils::validation::validate;

pub struct ConversationView {
    gateway: Arc<dyn MessagingGateway>,
    auth: Arc<AuthStore>,
    conversations: Vec<Conversation>,
    selected: Option<u32>,
    messages: Vec<Message>,
    draft: String,
}

impl ConversationView {
    pub fn new(gateway: Arc<dyn MessagingGateway>, auth: Arc<AuthStore>) -> Self {
        Self {
            gateway,
            auth,
            conversations: Vec::new(),
            selected: None,
            messages: Vec::new(),
            draft: String::new(),
        }
    }

    pub async fn load_conversations(&mut self) -> Result<&[Conversation]> {
        self.conversations = self.gateway.get_conversations().await?;
        Ok(&self.conversations)
    }

    /// Open a thread and load its messages
    pub async fn select(&mut self, conversation_id: u32) -> Result<&[Message]> {
        let messages = self.gateway.get_messages(conversation_id).await?;
        self.selected = Some(conversation_id);
        self.messages = messages;
        self.draft.clear();
        Ok(&self.messages)
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the draft to the open thread.
    ///
    /// On success the message is appended locally, the inbox preview is
    /// updated and the draft is cleared.
    pub async fn send(&mut self) -> Result<Message> {
        let conversation_id = self
            .selected
            .ok_or_else(|| MarketError::InvalidInput("Select a conversation first".to_string()))?;
        let user = self.auth.require_user()?;
        let content = self.draft.trim().to_string();
        validate(|v| {
            v.require_text("message", &content);
        })?;

        self.gateway.send_message(conversation_id, &user.username, &content).await?;

        let next_id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let timestamp = Local::now().format("%-I:%M %p").to_string();
        let message = Message { id: next_id, sender: user.username, content, timestamp };
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id) {
            conversation.last_message.clone_from(&message.content);
            conversation.last_message_time.clone_from(&message.timestamp);
        }
        self.messages.push(message.clone());
        self.draft.clear();
        debug!(conversation_id, message_id = message.id, "message_sent");
        Ok(message)
    }
}
