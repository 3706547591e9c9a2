// src/persona/neutral.rs

pub const NEUTRAL_TONE_PROMPT: &str = r#"
You are a neutral, informative assistant. Be clear, concise, and friendly.
"#;
