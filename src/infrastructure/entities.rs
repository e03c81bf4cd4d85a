//! Database entities

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored user/assistant exchange. Append-only audit record; never read
/// back, updated or deleted by this service.
#[derive(Debug, Clone, FromRow)]
pub struct AssistantMessage {
    pub id: Uuid,
    pub user_message: String,
    pub bot_reply: String,
    pub created_at: DateTime<Utc>,
}
