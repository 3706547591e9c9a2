// src/chat/turn.rs
// One user turn: remember, answer, restyle.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::chat::context::build_memory_summary;
use crate::chat::session::SessionHistory;
use crate::config::CONFIG;
use crate::llm::provider::{ChatRequest, CompletionBackend};
use crate::memory::extractor::{EXTRACTION_WINDOW, MemoryExtractor};
use crate::memory::store::MemoryStore;
use crate::memory::types::MemoryProfile;
use crate::persona::PersonaEngine;

const NEUTRAL_SYSTEM_PROMPT: &str = "You are a neutral, helpful assistant.\n\
    Use the provided user memory to personalize your answer when relevant.\n\
    Always finish your thoughts fully.";

/// Everything one turn produced, for the presentation layer to render.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub neutral_reply: String,
    pub persona_reply: String,
    pub memory_summary: String,
    pub window_len: usize,
}

/// Orchestrates the per-turn pipeline: history append, memory extraction and
/// merge, summary assembly, neutral answer, persona restyle. Three backend
/// calls per turn, strictly sequential since each step feeds the next.
///
/// Constructed once at process start with an injected backend; owns the
/// store and history so `&mut self` turns encode the single-in-flight-turn
/// assumption.
pub struct TurnEngine {
    backend: Arc<dyn CompletionBackend>,
    extractor: MemoryExtractor,
    style: PersonaEngine,
    store: MemoryStore,
    history: SessionHistory,
}

impl TurnEngine {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            extractor: MemoryExtractor::new(backend.clone()),
            style: PersonaEngine::new(backend.clone()),
            store: MemoryStore::new(),
            history: SessionHistory::new(),
            backend,
        }
    }

    /// Run one full turn for `session_id`. Extraction failures leave the
    /// profile unchanged and the turn proceeds; persona lookup and input
    /// contract violations propagate.
    pub async fn run_turn(
        &mut self,
        session_id: &str,
        persona_label: &str,
        user_message: &str,
    ) -> Result<TurnOutcome> {
        self.history.push(session_id, user_message);
        let window = self.history.recent(session_id, EXTRACTION_WINDOW);

        let extracted = self.extractor.extract(&window).await;
        if !extracted.is_empty() {
            info!(
                session = session_id,
                records = extracted.record_count(),
                "merging extracted memory"
            );
        }
        self.store.update(session_id, extracted);

        let memory_summary = build_memory_summary(self.store.get(session_id));
        debug!(session = session_id, summary = %memory_summary, "memory context for this turn");

        let answer_request = ChatRequest::from_system_user(
            NEUTRAL_SYSTEM_PROMPT,
            format!("{memory_summary}\n\nUser: {user_message}"),
        )
        .with_temperature(CONFIG.answer_temperature)
        .with_max_tokens(CONFIG.answer_max_tokens);

        let neutral_reply = self
            .backend
            .complete(answer_request)
            .await
            .context("neutral answer generation failed")?;

        let persona_reply = self
            .style
            .restyle(user_message, &neutral_reply, persona_label)
            .await?;

        Ok(TurnOutcome {
            neutral_reply,
            persona_reply,
            memory_summary,
            window_len: window.len(),
        })
    }

    /// Accumulated profile for a session (empty on first access).
    pub fn profile(&mut self, session_id: &str) -> &MemoryProfile {
        self.store.get(session_id)
    }

    /// Render the current memory summary without running a turn.
    pub fn memory_summary(&mut self, session_id: &str) -> String {
        build_memory_summary(self.store.get(session_id))
    }

    pub fn history_len(&self, session_id: &str) -> usize {
        self.history.len(session_id)
    }
}
