//! Conversation commands

use marketfeed_domain::{Conversation, Message, Result};

use crate::context::AppContext;
use crate::utils::execute_command;

pub async fn load_conversations(ctx: &AppContext) -> Result<Vec<Conversation>> {
    execute_command(ctx, "messaging::load_conversations", move || async move {
        let mut view = ctx.conversations.lock().await;
        let conversations = view.load_conversations().await?.to_vec();
        Ok(conversations)
    })
    .await
}

/// Open a conversation and load its messages
pub async fn select_conversation(ctx: &AppContext, conversation_id: u32) -> Result<Vec<Message>> {
    execute_command(ctx, "messaging::select_conversation", move || async move {
        let mut view = ctx.conversations.lock().await;
        let messages = view.select(conversation_id).await?.to_vec();
        Ok(messages)
    })
    .await
}

/// Send `text` to the selected conversation
pub async fn send_message(ctx: &AppContext, text: &str) -> Result<Message> {
    execute_command(ctx, "messaging::send_message", move || async move {
        let mut view = ctx.conversations.lock().await;
        view.set_draft(text);
        view.send().await
    })
    .await
}
