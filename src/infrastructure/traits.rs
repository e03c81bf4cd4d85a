//! Infrastructure traits, used for DI on higher levels

use crate::core::assistant::ChatMessage;
use crate::core::errors::ChatError;
use crate::infrastructure::entities;
use async_trait::async_trait;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submits an ordered prompt to the completion service and returns the
    /// generated text of the first choice.
    ///
    /// Transport errors, non-success statuses and malformed responses all
    /// surface as [`ChatError::Completion`].
    async fn complete(
        &self,
        model: &str,
        max_tokens: u32,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError>;
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Appends one exchange to the store and returns the stored record.
    async fn append(
        &self,
        record: entities::AssistantMessage,
    ) -> Result<entities::AssistantMessage, ChatError>;
}
