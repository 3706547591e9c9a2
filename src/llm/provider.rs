// src/llm/provider.rs
// Completion backend abstraction and request types

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A completion was requested without any message content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("chat completion requested with no messages")]
pub struct EmptyRequest;

/// Role-tagged chat message in the wire format the completion API expects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: String, // "system" | "user" | "assistant"
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// Chat completion request. Generation parameters left as `None` fall back
/// to the configured defaults when the backend builds the outbound call.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request from an explicit ordered message list.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Create a request from a (system instruction, user message) pair.
    /// Empty strings are skipped, so callers can supply either half alone.
    pub fn from_system_user(system: impl Into<String>, user: impl Into<String>) -> Self {
        let mut messages = Vec::new();
        let system = system.into();
        if !system.is_empty() {
            messages.push(Message::system(system));
        }
        let user = user.into();
        if !user.is_empty() {
            messages.push(Message::user(user));
        }
        Self::from_messages(messages)
    }

    /// Override the configured model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set maximum output tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Find the first message with the given role, if any.
    pub fn message_with_role(&self, role: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.role == role)
    }
}

/// Unified trait for text-generation backends.
///
/// One synchronous round trip per call: no retry, no streaming, no timeout
/// handling. Implementations return the generated text trimmed of
/// surrounding whitespace, or an empty string when the service produced no
/// content.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send a chat completion request and return the reply text.
    async fn complete(&self, request: ChatRequest) -> Result<String>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_system_user_builds_both_messages() {
        let req = ChatRequest::from_system_user("be terse", "hello");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0], Message::system("be terse"));
        assert_eq!(req.messages[1], Message::user("hello"));
        assert!(req.model.is_none());
    }

    #[test]
    fn from_system_user_skips_empty_halves() {
        let req = ChatRequest::from_system_user("", "hello");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");

        let req = ChatRequest::from_system_user("", "");
        assert!(req.messages.is_empty());
    }

    #[test]
    fn builder_setters_apply() {
        let req = ChatRequest::from_messages(vec![Message::user("hi")])
            .with_model("test-model")
            .with_temperature(0.7)
            .with_max_tokens(128);
        assert_eq!(req.model.as_deref(), Some("test-model"));
        assert_eq!(req.temperature, Some(0.7));
        assert_eq!(req.max_tokens, Some(128));
    }

    #[test]
    fn message_serializes_to_role_content() {
        let msg = Message::user("hello");
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["role"], "user");
        assert_eq!(v["content"], "hello");
    }
}
