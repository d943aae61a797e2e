//! Narrative engine for Voidgate.
//!
//! Turns a line of player input into state changes and text. The command
//! interpreter dispatches to simple accessors, the combat resolver, or the
//! narrative state machine: scripted NPC conversations, named decision points
//! that suspend the turn until the player picks an option, and the per-turn
//! triggers that run ambushes and rebuild the world between acts.

/// Game configuration.
pub mod config;
/// Error types for the narrative engine.
pub mod error;
/// Branching narrative: decisions, scripts, acts and triggers.
pub mod narrative;
/// Command parsing and name resolution.
pub mod parser;
/// Turn output.
pub mod reply;
/// The game session driving a run.
pub mod session;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use narrative::{Choice, Decision};
pub use parser::{Command, Verb, help_line, parse_command};
pub use reply::{Ending, Reply};
pub use session::{GameSession, SessionState};
