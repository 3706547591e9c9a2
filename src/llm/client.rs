// src/llm/client.rs

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::env;

use crate::config::CONFIG;
use crate::llm::provider::{ChatRequest, CompletionBackend, EmptyRequest};

/// Client for Groq's OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct GroqClient {
    pub client: Client,
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl GroqClient {
    pub fn new() -> Result<Self> {
        let api_key = env::var("GROQ_API_KEY")
            .context("GROQ_API_KEY is not set; add it to the environment or a .env file")?;
        Ok(Self::with_api_key(
            api_key,
            CONFIG.groq_base_url.clone(),
            CONFIG.model.clone(),
        ))
    }

    /// Construct with explicit credentials, bypassing the environment.
    pub fn with_api_key(api_key: String, api_base: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        if request.messages.is_empty() {
            return Err(EmptyRequest.into());
        }

        let body = json!({
            "model": request.model.as_deref().unwrap_or(&self.model),
            "messages": request.messages,
            "temperature": request.temperature.unwrap_or(CONFIG.temperature),
            "max_tokens": request.max_tokens.unwrap_or(CONFIG.max_output_tokens),
        });

        let resp = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("failed to send chat completion request")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(anyhow!("Groq API error {}: {}", status, error_text));
        }

        let resp_json: Value = resp
            .json()
            .await
            .context("failed to parse chat completion response")?;

        // Missing content is not an error: callers get an empty string back.
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GroqClient {
        GroqClient::with_api_key(
            "test-key".into(),
            "http://localhost:9".into(),
            "test-model".into(),
        )
    }

    #[tokio::test]
    async fn empty_request_is_rejected_before_any_io() {
        let client = test_client();
        let err = client
            .complete(ChatRequest::from_messages(vec![]))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<EmptyRequest>().is_some());
    }

    #[tokio::test]
    async fn empty_system_user_pair_is_rejected() {
        let client = test_client();
        let err = client
            .complete(ChatRequest::from_system_user("", ""))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<EmptyRequest>().is_some());
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = GroqClient::with_api_key(
            "k".into(),
            "https://api.groq.com/openai/v1/".into(),
            "m".into(),
        );
        assert_eq!(
            client.endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }
}
