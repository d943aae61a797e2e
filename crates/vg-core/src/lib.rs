//! Core data model for the Voidgate text adventure.
//!
//! Defines the entities that populate an act (items, enemies, characters and
//! rooms), the player's stat block and inventory, the story progress vector
//! that records every narrative decision, and the append-only journal.

/// Dialogue agents.
pub mod character;
/// Conditions evaluated against the story progress vector.
pub mod condition;
/// Combat participants.
pub mod enemy;
/// Error types for the core data model.
pub mod error;
/// Item templates and effects.
pub mod item;
/// Append-only event journal.
pub mod journal;
/// Room graph for a single act.
pub mod map;
/// Player stats, inventory and movement history.
pub mod player;
/// Rooms, exits and conditional descriptions.
pub mod room;
/// The aggregate game state.
pub mod state;
/// Story progress vector: per-act stages and side-choice tags.
pub mod story;

pub use character::{Character, Dialogue, ScriptId, Utterance};
pub use condition::Condition;
pub use enemy::{Boss, Enemy};
pub use error::{CoreError, CoreResult};
pub use item::{Item, ItemEffect};
pub use journal::{Journal, JournalEntry};
pub use map::{Map, RoomId};
pub use player::{Inventory, Player, StatDelta, Stats};
pub use room::{Description, Direction, Room};
pub use state::GameState;
pub use story::{
    Act, AurelionStage, BossProgress, Cover, CrashChoice, Fact, Illusions, MerchantDeal, PrisonPlan,
    Story, Strategy, Survivor, ThroneAnswer, UniqueItem, VelyraStage,
};
