//! Implementations for the service the app needs.
//!

use crate::core::assistant::AssistantConfig;
use crate::core::errors::ChatError;
use crate::core::traits::ChatService;
use crate::infrastructure::entities::AssistantMessage;
use crate::infrastructure::traits::{CompletionClient, MessageStore};
use async_trait::async_trait;
use chrono::Utc;
use di::{Ref, injectable};
use uuid::Uuid;

#[injectable(ChatService)]
pub struct MyChatService {
    config: Ref<AssistantConfig>,
    completion: Ref<dyn CompletionClient>,
    store: Ref<dyn MessageStore>,
}

#[async_trait]
impl ChatService for MyChatService {
    async fn handle_chat(&self, message: &str) -> Result<String, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let prompt = self.config.prompt(message);
        let reply = self
            .completion
            .complete(&self.config.model, self.config.max_completion_tokens, &prompt)
            .await?;
        let reply = reply.trim().to_owned();

        // Persisted synchronously: a write failure fails the request even
        // though the reply was already generated.
        self.store
            .append(AssistantMessage {
                id: Uuid::new_v4(),
                user_message: message.to_owned(),
                bot_reply: reply.clone(),
                created_at: Utc::now(),
            })
            .await?;

        Ok(reply)
    }
}
