// src/persona/engine.rs

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::config::CONFIG;
use crate::llm::provider::{ChatRequest, CompletionBackend};
use crate::persona::Persona;

const STYLE_SYSTEM_PROMPT: &str = r#"
You are a style adapter for an AI assistant.
Given:
1) The user's message
2) A base reply (neutral, factual)
3) A target persona description

Task:
- Rewrite the base reply in the target persona's tone.
- Preserve ALL factual content and instructions.
- Do not invent new facts.
- Do not contradict the original answer.

Return ONLY the rewritten reply, as plain text.
"#;

/// Rewrites a neutral reply in a persona's tone via one backend call.
/// Fact preservation is delegated entirely to the instruction prompt;
/// nothing checks the rewrite programmatically.
pub struct PersonaEngine {
    backend: Arc<dyn CompletionBackend>,
}

impl PersonaEngine {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Rewrite `base_reply` in the tone named by `label`.
    /// Unknown labels fail with `UnknownPersona` before any backend call.
    pub async fn restyle(
        &self,
        user_message: &str,
        base_reply: &str,
        label: &str,
    ) -> Result<String> {
        let persona: Persona = label.parse()?;

        debug!(persona = %persona, "restyling reply");

        let user_prompt = format!(
            "[USER MESSAGE]\n{user_message}\n\n[BASE REPLY]\n{base_reply}\n\n[PERSONA]\n{}",
            persona.tone_prompt()
        );

        let request = ChatRequest::from_system_user(STYLE_SYSTEM_PROMPT, user_prompt)
            .with_temperature(CONFIG.style_temperature)
            .with_max_tokens(CONFIG.style_max_tokens);

        self.backend.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{UnknownPersona, WITTY_FRIEND_TONE_PROMPT};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingBackend {
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl RecordingBackend {
        fn new() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(&self, request: ChatRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request);
            Ok("restyled reply".to_string())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn witty_friend_issues_one_call_embedding_the_tone_prompt() {
        let backend = Arc::new(RecordingBackend::new());
        let engine = PersonaEngine::new(backend.clone());

        let reply = engine
            .restyle("how do I start running?", "Start with short runs.", "witty_friend")
            .await
            .unwrap();

        assert_eq!(reply, "restyled reply");
        assert_eq!(backend.request_count(), 1);

        let requests = backend.requests.lock().unwrap();
        let user = requests[0].message_with_role("user").unwrap();
        assert!(user.content.contains(WITTY_FRIEND_TONE_PROMPT));
        assert!(user.content.contains("[BASE REPLY]\nStart with short runs."));
        assert!(user.content.contains("[USER MESSAGE]\nhow do I start running?"));

        let system = requests[0].message_with_role("system").unwrap();
        assert!(system.content.contains("style adapter"));
    }

    #[tokio::test]
    async fn unknown_label_fails_before_any_call() {
        let backend = Arc::new(RecordingBackend::new());
        let engine = PersonaEngine::new(backend.clone());

        let err = engine
            .restyle("hello", "a reply", "sarcastic_robot")
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<UnknownPersona>().is_some());
        assert_eq!(backend.request_count(), 0);
    }
}
