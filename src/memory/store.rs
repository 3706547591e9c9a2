// src/memory/store.rs

use std::collections::HashMap;

use crate::memory::types::{ExtractedMemory, MemoryProfile};

/// In-process memory store, keyed by opaque session id.
///
/// Construct once at process start and pass by reference to whatever
/// orchestrates turns. Mutation goes through `&mut self`, which is the only
/// concurrency guard this store has: the design assumes at most one
/// in-flight turn per session and no persistence across restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: HashMap<String, MemoryProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Current accumulated profile for a session, created empty on first
    /// access. Never fails.
    pub fn get(&mut self, session_id: &str) -> &MemoryProfile {
        self.profiles.entry(session_id.to_string()).or_default()
    }

    /// Append-merge an extraction pass into the session's profile. Identical
    /// records extracted across turns accumulate as repeated entries; there
    /// is deliberately no deduplication or conflict detection.
    pub fn update(&mut self, session_id: &str, new_memory: ExtractedMemory) {
        self.profiles
            .entry(session_id.to_string())
            .or_default()
            .merge(new_memory);
    }

    pub fn session_count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::{Fact, Stability, UserPreference};

    fn sample_memory() -> ExtractedMemory {
        ExtractedMemory {
            preferences: vec![UserPreference {
                category: "learning_style".into(),
                value: "prefers worked examples".into(),
                evidence_messages: vec![0, 3],
                confidence: 0.85,
                stability: Stability::LongTerm,
            }],
            emotional_patterns: vec![],
            facts: vec![Fact {
                fact_type: "goal".into(),
                value: "shipping a side project this year".into(),
                evidence_messages: vec![1],
                confidence: 0.6,
                expiry: Some("2026-12-31".into()),
            }],
        }
    }

    #[test]
    fn fresh_session_gets_an_empty_profile() {
        let mut store = MemoryStore::new();
        let profile = store.get("never_seen");
        assert!(profile.preferences.is_empty());
        assert!(profile.emotional_patterns.is_empty());
        assert!(profile.facts.is_empty());
    }

    #[test]
    fn update_appends_records() {
        let mut store = MemoryStore::new();
        store.update("s1", sample_memory());

        let profile = store.get("s1");
        assert_eq!(profile.preferences.len(), 1);
        assert_eq!(profile.facts.len(), 1);
        assert_eq!(profile.facts[0].expiry.as_deref(), Some("2026-12-31"));
    }

    #[test]
    fn merging_twice_doubles_counts() {
        // Append semantics are intentional: the same extraction merged twice
        // must grow the profile, not leave it stable.
        let mut store = MemoryStore::new();
        store.update("s1", sample_memory());
        store.update("s1", sample_memory());

        let profile = store.get("s1");
        assert_eq!(profile.preferences.len(), 2);
        assert_eq!(profile.facts.len(), 2);
    }

    #[test]
    fn sequential_merges_equal_one_concatenated_merge() {
        let a = sample_memory();
        let mut b = sample_memory();
        b.preferences[0].value = "prefers diagrams".into();
        b.facts[0].value = "starting a new job".into();

        let mut sequential = MemoryStore::new();
        sequential.update("s", a.clone());
        sequential.update("s", b.clone());

        let mut concatenated = a.clone();
        concatenated.preferences.extend(b.preferences.clone());
        concatenated.emotional_patterns.extend(b.emotional_patterns.clone());
        concatenated.facts.extend(b.facts.clone());
        let mut single = MemoryStore::new();
        single.update("s", concatenated);

        let lhs = sequential.get("s");
        let rhs = single.get("s");
        assert_eq!(lhs.preferences.len(), rhs.preferences.len());
        let lhs_values: Vec<_> = lhs.preferences.iter().map(|p| p.value.clone()).collect();
        let rhs_values: Vec<_> = rhs.preferences.iter().map(|p| p.value.clone()).collect();
        assert_eq!(lhs_values, rhs_values);
        let lhs_facts: Vec<_> = lhs.facts.iter().map(|f| f.value.clone()).collect();
        let rhs_facts: Vec<_> = rhs.facts.iter().map(|f| f.value.clone()).collect();
        assert_eq!(lhs_facts, rhs_facts);
    }

    #[test]
    fn sessions_are_isolated() {
        let mut store = MemoryStore::new();
        store.update("s1", sample_memory());

        assert!(store.get("s2").is_empty());
        assert!(!store.get("s1").is_empty());
        assert_eq!(store.session_count(), 2);
    }
}
