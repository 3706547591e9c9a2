// src/memory/extractor.rs
// Turns a window of raw user utterances into structured memory records.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::CONFIG;
use crate::llm::provider::{ChatRequest, CompletionBackend};
use crate::memory::types::ExtractedMemory;

/// Hard cap on how many recent utterances extraction can see.
/// Older messages are invisible; not configurable at call time.
pub const EXTRACTION_WINDOW: usize = 30;

const EXTRACTION_SYSTEM_PROMPT: &str = r#"
You are a memory extraction module for a personal AI companion.

Goal:
From the LAST 30 USER MESSAGES ONLY, extract:
1) User preferences
2) Emotional patterns
3) Facts worth remembering

Rules:
- Only include information that is likely to be useful in future conversations.
- Ignore one-off details that are unlikely to matter later.
- Prefer stable, long-term traits over temporary states.
- Include a confidence score between 0 and 1.
- Use message indices (0..n-1) as evidence_messages.

Output format:
- You MUST return ONLY raw JSON. Do NOT wrap it in backticks or Markdown.
- The JSON must strictly follow this shape:

{
  "preferences": [
    {
      "category": "string",
      "value": "string",
      "evidence_messages": [0],
      "confidence": 0.9,
      "stability": "short_term" or "long_term"
    }
  ],
  "emotional_patterns": [
    {
      "trigger": "string",
      "typical_emotion": "string",
      "description": "string",
      "evidence_messages": [0],
      "confidence": 0.9
    }
  ],
  "facts": [
    {
      "fact_type": "string",
      "value": "string",
      "evidence_messages": [0],
      "confidence": 0.9,
      "expiry": "none" or "YYYY-MM-DD"
    }
  ]
}

If you cannot find any meaningful memory, return:
{
  "preferences": [],
  "emotional_patterns": [],
  "facts": []
}
"#;

/// Asks the backend for structured memory over recent messages and parses
/// the reply. Extraction never fails upward: a flaky generative step must
/// not crash the turn, so every error path degrades to an empty result.
pub struct MemoryExtractor {
    backend: Arc<dyn CompletionBackend>,
}

impl MemoryExtractor {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Extract structured memory from the last `EXTRACTION_WINDOW` entries
    /// of `utterances`. Returns an empty `ExtractedMemory` on any failure.
    pub async fn extract(&self, utterances: &[String]) -> ExtractedMemory {
        let window = &utterances[utterances.len().saturating_sub(EXTRACTION_WINDOW)..];
        if window.is_empty() {
            return ExtractedMemory::default();
        }

        debug!(window = window.len(), "extracting memory from recent messages");

        let numbered: Vec<String> = window
            .iter()
            .enumerate()
            .map(|(i, m)| format!("[{i}] {m}"))
            .collect();
        let user_prompt = format!(
            "Here are the last user messages:\n\n{}",
            numbered.join("\n")
        );

        let request = ChatRequest::from_system_user(EXTRACTION_SYSTEM_PROMPT, user_prompt)
            .with_temperature(CONFIG.extract_temperature)
            .with_max_tokens(CONFIG.extract_max_tokens);

        let raw = match self.backend.complete(request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "memory extraction call failed, keeping profile unchanged");
                return ExtractedMemory::default();
            }
        };

        if raw.trim().is_empty() {
            warn!("empty extraction response, keeping profile unchanged");
            return ExtractedMemory::default();
        }

        let cleaned = normalize_json_text(&raw);

        let value: Value = match serde_json::from_str(&cleaned) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "extraction output is not valid JSON");
                debug!(%raw, %cleaned, "discarded extraction output");
                return ExtractedMemory::default();
            }
        };

        match serde_json::from_value::<ExtractedMemory>(value) {
            Ok(memory) => {
                debug!(
                    preferences = memory.preferences.len(),
                    patterns = memory.emotional_patterns.len(),
                    facts = memory.facts.len(),
                    "extraction parsed"
                );
                memory
            }
            Err(e) => {
                warn!(error = %e, "extraction output did not match the expected shape");
                ExtractedMemory::default()
            }
        }
    }
}

/// Normalize generated output into parseable JSON text: strip surrounding
/// code fences (with or without a `json` tag), then fall back to the
/// substring between the first `{` and the last `}` if wrapper prose
/// remains.
fn normalize_json_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = raw.trim().to_string();

    if text.starts_with("```") {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines
            .first()
            .is_some_and(|l| l.trim_start().starts_with("```"))
        {
            lines.remove(0);
        }
        if lines.last().is_some_and(|l| l.trim().starts_with("```")) {
            lines.pop();
        }
        text = lines.join("\n").trim().to_string();
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if end > start {
            text = text[start..=end].trim().to_string();
        }
    }

    text
}
