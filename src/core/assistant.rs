//! Assistant persona, prompt types and completion settings.
//!

use di::{inject, injectable};
use std::env;

/// Fixed system instruction sent ahead of every user message. The completion
/// service depends on receiving this before the user turn; do not reorder.
pub const PERSONA: &str = "You are an assistant for users of the GreenWheelStation mobile application, \
which helps users locate the nearest EV charging stations on a map. Your primary role \
is to provide helpful, concise information about navigating the map, understanding different \
types of charging stations (Level 1, 2, DC Fast Charging), vehicle compatibility, technical \
details about EV batteries and charging times, troubleshooting common charging issues, and \
information on payment methods and charging networks.";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 150;

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Completion settings handed to the chat service, so nothing in `core`
/// reads process globals at request time.
pub struct AssistantConfig {
    pub model: String,
    pub max_completion_tokens: u32,
    pub persona: String,
}

#[injectable]
impl AssistantConfig {
    #[inject]
    pub fn create() -> AssistantConfig {
        dotenvy::dotenv().ok();
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let max_completion_tokens = env::var("MAX_COMPLETION_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_COMPLETION_TOKENS);

        AssistantConfig {
            model,
            max_completion_tokens,
            persona: PERSONA.to_owned(),
        }
    }
}

impl AssistantConfig {
    /// Ordered two-message prompt for a single user message: persona first,
    /// then the user text.
    pub fn prompt(&self, user_message: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(&self.persona),
            ChatMessage::user(user_message),
        ]
    }
}
