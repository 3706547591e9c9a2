// src/chat/session.rs

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// One raw user utterance, as received.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub content: String,
    pub at: DateTime<Utc>,
}

/// Per-session ordered log of raw user utterances. Grows unbounded for the
/// lifetime of the process; extraction windows it, nothing trims it.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: HashMap<String, Vec<HistoryEntry>>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn push(&mut self, session_id: &str, content: impl Into<String>) {
        self.entries
            .entry(session_id.to_string())
            .or_default()
            .push(HistoryEntry {
                content: content.into(),
                at: Utc::now(),
            });
    }

    /// Last `limit` utterances for a session, oldest first.
    pub fn recent(&self, session_id: &str, limit: usize) -> Vec<String> {
        let Some(entries) = self.entries.get(session_id) else {
            return Vec::new();
        };
        entries[entries.len().saturating_sub(limit)..]
            .iter()
            .map(|e| e.content.clone())
            .collect()
    }

    pub fn len(&self, session_id: &str) -> usize {
        self.entries.get(session_id).map_or(0, |e| e.len())
    }

    pub fn is_empty(&self, session_id: &str) -> bool {
        self.len(session_id) == 0
    }
}

/// Generates a new random session ID (UUID v4)
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}
