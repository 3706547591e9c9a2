// src/chat/mod.rs
// Turn orchestration: session history, memory context, and the per-turn
// extract → answer → restyle pipeline.

pub mod context;
pub mod session;
pub mod turn;

pub use context::build_memory_summary;
pub use session::{SessionHistory, generate_session_id};
pub use turn::{TurnEngine, TurnOutcome};
