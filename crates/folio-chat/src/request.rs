//! Chat request body and validation

use serde::Deserialize;
use crate::error::ChatError;

/// One message of the terminal conversation
#[derive(Clone, Debug, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    /// Kept untyped so a non-string content reads as an invalid query,
    /// not an invalid body
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Body of `POST /api/chat`
#[derive(Clone, Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Parse a raw request body and extract the question to forward.
///
/// The question is the content of the last message. It must be a string of
/// at most `max_chars` characters.
pub fn parse_question(body: &[u8], max_chars: usize) -> Result<String, ChatError> {
    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|e| ChatError::InvalidBody(e.to_string()))?;

    let Some(last) = request.messages.last() else {
        return Err(ChatError::InvalidBody("messages is empty".to_string()));
    };

    match &last.content {
        serde_json::Value::String(text) if text.chars().count() <= max_chars => Ok(text.clone()),
        _ => Err(ChatError::InvalidQuery),
    }
}
