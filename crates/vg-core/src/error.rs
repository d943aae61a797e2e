//! Error types for the core data model.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by inventory and map operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Picking the item up would exceed the carry limit.
    #[error("{item} is too heavy: carrying {carried}/{max}, it weighs {weight}.")]
    TooHeavy {
        /// Item name.
        item: String,
        /// Weight currently carried.
        carried: u32,
        /// Carry limit.
        max: u32,
        /// Weight of the item.
        weight: u32,
    },

    /// The player does not carry an item with that name.
    #[error("You are not carrying {0}.")]
    NotCarried(String),

    /// A room id does not belong to the current map.
    #[error("room #{0} does not exist")]
    UnknownRoom(usize),
}
