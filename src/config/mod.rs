// src/config/mod.rs
// Environment-driven configuration with sane defaults.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct GupshupConfig {
    // ── Groq Configuration
    pub groq_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,

    // ── Per-stage generation parameters
    pub extract_temperature: f32,
    pub extract_max_tokens: u32,
    pub answer_temperature: f32,
    pub answer_max_tokens: u32,
    pub style_temperature: f32,
    pub style_max_tokens: u32,

    // ── Persona Configuration
    pub default_persona: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with inline comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

pub static CONFIG: Lazy<GupshupConfig> = Lazy::new(|| GupshupConfig {
    groq_base_url: env_var_or(
        "GROQ_BASE_URL",
        "https://api.groq.com/openai/v1".to_string(),
    ),
    model: env_var_or(
        "GUPSHUP_MODEL",
        "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
    ),
    temperature: env_var_or("GUPSHUP_TEMPERATURE", 0.3),
    max_output_tokens: env_var_or("GUPSHUP_MAX_OUTPUT_TOKENS", 768),

    extract_temperature: env_var_or("GUPSHUP_EXTRACT_TEMPERATURE", 0.3),
    extract_max_tokens: env_var_or("GUPSHUP_EXTRACT_MAX_TOKENS", 768),
    answer_temperature: env_var_or("GUPSHUP_ANSWER_TEMPERATURE", 0.2),
    answer_max_tokens: env_var_or("GUPSHUP_ANSWER_MAX_TOKENS", 768),
    style_temperature: env_var_or("GUPSHUP_STYLE_TEMPERATURE", 0.3),
    style_max_tokens: env_var_or("GUPSHUP_STYLE_MAX_TOKENS", 768),

    default_persona: env_var_or("GUPSHUP_DEFAULT_PERSONA", "calm_mentor".to_string()),

    log_level: env_var_or("GUPSHUP_LOG_LEVEL", "info".to_string()),
});
