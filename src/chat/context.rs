// src/chat/context.rs
// Renders the stored profile into the prompt block the neutral answer
// is conditioned on.

use crate::memory::types::MemoryProfile;

/// Build the "Known user memory:" summary for a session profile.
/// Sections with no records are omitted; an empty profile renders as
/// "(none yet)".
pub fn build_memory_summary(profile: &MemoryProfile) -> String {
    let pref_lines: Vec<String> = profile
        .preferences
        .iter()
        .map(|p| format!("- {}", p.value))
        .collect();
    let emotion_lines: Vec<String> = profile
        .emotional_patterns
        .iter()
        .map(|e| format!("- When {} → typically feels {}", e.trigger, e.typical_emotion))
        .collect();
    let fact_lines: Vec<String> = profile
        .facts
        .iter()
        .map(|f| format!("- {}", f.value))
        .collect();

    let mut summary = String::from("Known user memory:\n");
    if !pref_lines.is_empty() {
        summary.push_str("\nPreferences:\n");
        summary.push_str(&pref_lines.join("\n"));
    }
    if !emotion_lines.is_empty() {
        summary.push_str("\n\nEmotional patterns:\n");
        summary.push_str(&emotion_lines.join("\n"));
    }
    if !fact_lines.is_empty() {
        summary.push_str("\n\nFacts:\n");
        summary.push_str(&fact_lines.join("\n"));
    }
    if pref_lines.is_empty() && emotion_lines.is_empty() && fact_lines.is_empty() {
        summary.push_str("\n(none yet)");
    }

    summary
}
