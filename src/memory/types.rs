// src/memory/types.rs

use serde::{Deserialize, Serialize};

/// How durable a preference is expected to be.
/// Recorded as extracted; nothing downstream acts on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    ShortTerm,
    LongTerm,
}

/// A stated or inferred user preference, e.g. "prefers late-night coding".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPreference {
    pub category: String,
    pub value: String,
    /// 0-based indices into the evaluated message window
    pub evidence_messages: Vec<usize>,
    pub confidence: f32,
    pub stability: Stability,
}

/// A recurring emotional response tied to a trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionalPattern {
    pub trigger: String,
    pub typical_emotion: String,
    pub description: String,
    pub evidence_messages: Vec<usize>,
    pub confidence: f32,
}

/// A concrete fact worth carrying forward, e.g. "finished BTech in 2025".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fact {
    pub fact_type: String,
    pub value: String,
    pub evidence_messages: Vec<usize>,
    pub confidence: f32,
    /// Date string or "none"; stored verbatim, never interpreted
    #[serde(default)]
    pub expiry: Option<String>,
}

/// One extraction pass over a message window. All three keys must be present
/// in the generated JSON; unrecognized fields fail the parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractedMemory {
    pub preferences: Vec<UserPreference>,
    pub emotional_patterns: Vec<EmotionalPattern>,
    pub facts: Vec<Fact>,
}

impl ExtractedMemory {
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty() && self.emotional_patterns.is_empty() && self.facts.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.preferences.len() + self.emotional_patterns.len() + self.facts.len()
    }
}

/// Cumulative memory for one session. Records are append-only: once merged
/// they are never modified, deduplicated, or evicted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryProfile {
    pub preferences: Vec<UserPreference>,
    pub emotional_patterns: Vec<EmotionalPattern>,
    pub facts: Vec<Fact>,
}

impl MemoryProfile {
    /// Append every record from an extraction pass, preserving order.
    pub fn merge(&mut self, new_memory: ExtractedMemory) {
        self.preferences.extend(new_memory.preferences);
        self.emotional_patterns.extend(new_memory.emotional_patterns);
        self.facts.extend(new_memory.facts);
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty() && self.emotional_patterns.is_empty() && self.facts.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.preferences.len() + self.emotional_patterns.len() + self.facts.len()
    }
}
