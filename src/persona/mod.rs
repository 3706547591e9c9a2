// src/persona/mod.rs
// Persona overlays for the restyle pass. Each persona maps a label from the
// closed set to a fixed tone description embedded in the rewrite prompt.

pub mod calm_mentor;
pub mod engine;
pub mod neutral;
pub mod therapist;
pub mod witty_friend;

pub use calm_mentor::CALM_MENTOR_TONE_PROMPT;
pub use engine::PersonaEngine;
pub use neutral::NEUTRAL_TONE_PROMPT;
pub use therapist::THERAPIST_TONE_PROMPT;
pub use witty_friend::WITTY_FRIEND_TONE_PROMPT;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A persona label outside the closed set was requested.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown persona label: {0}")]
pub struct UnknownPersona(pub String);

/// The closed set of personas the style engine can rewrite into.
/// There is no default or fallback: unknown labels are a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Neutral,
    CalmMentor,
    WittyFriend,
    Therapist,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Neutral,
        Persona::CalmMentor,
        Persona::WittyFriend,
        Persona::Therapist,
    ];

    /// Fixed tone description for this persona.
    pub fn tone_prompt(&self) -> &'static str {
        match self {
            Persona::Neutral => NEUTRAL_TONE_PROMPT,
            Persona::CalmMentor => CALM_MENTOR_TONE_PROMPT,
            Persona::WittyFriend => WITTY_FRIEND_TONE_PROMPT,
            Persona::Therapist => THERAPIST_TONE_PROMPT,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Persona::Neutral => "neutral",
                Persona::CalmMentor => "calm_mentor",
                Persona::WittyFriend => "witty_friend",
                Persona::Therapist => "therapist",
            }
        )
    }
}

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neutral" => Ok(Persona::Neutral),
            "calm_mentor" => Ok(Persona::CalmMentor),
            "witty_friend" => Ok(Persona::WittyFriend),
            "therapist" => Ok(Persona::Therapist),
            other => Err(UnknownPersona(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_display_and_from_str() {
        for persona in Persona::ALL {
            let label = persona.to_string();
            assert_eq!(label.parse::<Persona>().unwrap(), persona);
        }
    }

    #[test]
    fn unknown_label_is_a_lookup_error() {
        let err = "pirate".parse::<Persona>().unwrap_err();
        assert_eq!(err, UnknownPersona("pirate".into()));
    }

    #[test]
    fn each_persona_has_a_distinct_tone_prompt() {
        let prompts: Vec<_> = Persona::ALL.iter().map(|p| p.tone_prompt()).collect();
        for (i, a) in prompts.iter().enumerate() {
            assert!(!a.trim().is_empty());
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
