//! The narrative state machine.
//!
//! Branch points read the story progress vector in a fixed priority order,
//! apply stat deltas and story writes, and produce text. Anything that needs
//! a player choice raises a [`Decision`] instead of blocking; the session
//! holds it until a valid option arrives and then calls [`resolve`].

/// Room graphs for each act.
pub mod acts;
/// Item and enemy templates.
pub mod content;
/// The probabilistic bribe of Karn's general.
pub mod corruption;
/// Named decision points and their resolution.
pub mod decision;
/// Stage-based NPC conversations.
pub mod script;
/// Per-turn side conditions: transitions, ambushes and endings.
pub mod triggers;

pub use decision::{Choice, Decision, resolve};
