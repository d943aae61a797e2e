//! Error types for the narrative engine.
//!
//! Every variant except the configuration ones is a recoverable, player-facing
//! message: the session prints it and the turn ends with no state change.

use std::path::PathBuf;

use thiserror::Error;
use vg_core::CoreError;
use vg_mechanics::MechError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The verb is not known.
    #[error("Unknown command: {verb}.{hint}")]
    UnknownCommand {
        /// The verb as typed.
        verb: String,
        /// Optional " Did you mean ...?" suffix.
        hint: String,
    },

    /// A verb that needs an argument was given none.
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Not a direction.
    #[error("'{0}' is not a direction.")]
    UnknownDirection(String),

    /// No exit that way.
    #[error("You can't go {0} from here.")]
    NoExit(&'static str),

    /// The history stack is empty.
    #[error("There is nowhere to go back to.")]
    NoHistory,

    /// Nothing with that name in the room.
    #[error("There is no {name} here.{hint}")]
    NotHere {
        /// The name as typed.
        name: String,
        /// Optional " Did you mean ...?" suffix.
        hint: String,
    },

    /// The item cannot be used.
    #[error("{0} cannot be used.")]
    CannotUse(String),

    /// A non-combat verb was used mid-fight.
    #[error("You are in combat! Allowed commands: {allowed}.")]
    CombatLocked {
        /// The allowed verbs, comma separated.
        allowed: String,
    },

    /// Unknown journal export format.
    #[error("Unknown journal format '{0}'. Use md, text or json.")]
    UnknownFormat(String),

    /// Serialization failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        /// The file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a config.
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// The file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A data-model error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A combat error.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}
