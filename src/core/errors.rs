//! Error taxonomy for the chat pipeline.

use thiserror::Error;

/// Failures that can surface while handling a chat request.
///
/// `Display` is the user-facing detail text, so the downstream variants carry
/// the underlying error's description verbatim. The variant itself records
/// where the failure originated, which only shows up in logs.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The caller supplied an empty or whitespace-only message.
    #[error("Message is required")]
    EmptyMessage,

    /// The completion call failed or returned an unusable response.
    #[error("{0}")]
    Completion(String),

    /// The exchange could not be appended to the message store.
    #[error("{0}")]
    Persistence(String),
}
