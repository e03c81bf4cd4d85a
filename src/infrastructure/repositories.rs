//! DB Repository abstractions

use crate::core::errors::ChatError;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::AssistantMessage;
use crate::infrastructure::traits::MessageStore;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::error;

#[injectable(MessageStore)]
pub struct DbMessageStore {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl MessageStore for DbMessageStore {
    async fn append(&self, record: AssistantMessage) -> Result<AssistantMessage, ChatError> {
        sqlx::query_as(
            "INSERT INTO assistant_messages (id, user_message, bot_reply, created_at) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(record.id)
        .bind(record.user_message)
        .bind(record.bot_reply)
        .bind(record.created_at)
        .fetch_one(&**self.connection)
        .await
        .map_err(|e| {
            error!("failed to append assistant message: {e}");
            ChatError::Persistence(e.to_string())
        })
    }
}
