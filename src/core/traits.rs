//! DI "Interfaces"

use crate::core::errors::ChatError;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Runs one user message through the assistant pipeline: validate, ask
    /// the completion service for a reply, persist the exchange.
    ///
    /// Returns the generated reply, or a classified [`ChatError`] when
    /// validation or a downstream collaborator fails.
    async fn handle_chat(&self, message: &str) -> Result<String, ChatError>;
}
