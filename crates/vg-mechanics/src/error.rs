//! Error types for the mechanics engine.

use vg_core::CoreError;

/// Errors that can occur during combat. Display strings are shown to the player.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MechError {
    /// `attack` without a target.
    #[error("Attack whom?")]
    MissingTarget,

    /// No enemy with that name in the room.
    #[error("There is no {0} here.")]
    NoSuchEnemy(String),

    /// The named enemy is already down.
    #[error("{0} is already defeated.")]
    AlreadyDefeated(String),

    /// The player has fallen; combat is over for good.
    #[error("You have fallen and can no longer fight.")]
    PlayerDefeated,

    /// A data-model error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
