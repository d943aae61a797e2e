//! Append-only record of everything that happened during a run.

/// Journal entry types.
pub mod entry;
/// Journal storage and export.
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
