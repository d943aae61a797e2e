//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The player changed rooms.
    Travel {
        /// Room left.
        from: String,
        /// Room entered.
        to: String,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A story beat.
    Narrative {
        /// What happened.
        text: String,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A combat outcome.
    Combat {
        /// What happened.
        text: String,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A resolved decision point.
    Decision {
        /// Decision point title.
        point: String,
        /// Label of the option taken.
        option: String,
        /// When it was decided.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// A travel entry stamped now.
    pub fn travel(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Travel {
            from: from.into(),
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    /// A narrative entry stamped now.
    pub fn narrative(text: impl Into<String>) -> Self {
        Self::Narrative {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// A combat entry stamped now.
    pub fn combat(text: impl Into<String>) -> Self {
        Self::Combat {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// A decision entry stamped now.
    pub fn decision(point: impl Into<String>, option: impl Into<String>) -> Self {
        Self::Decision {
            point: point.into(),
            option: option.into(),
            timestamp: Utc::now(),
        }
    }

    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Travel { timestamp, .. }
            | Self::Narrative { timestamp, .. }
            | Self::Combat { timestamp, .. }
            | Self::Decision { timestamp, .. } => *timestamp,
        }
    }

    /// One-line summary used by the history view.
    pub fn summary(&self) -> String {
        match self {
            Self::Travel { from, to, .. } => format!("Travelled from {from} to {to}"),
            Self::Narrative { text, .. } => text.clone(),
            Self::Combat { text, .. } => format!("Combat: {text}"),
            Self::Decision { point, option, .. } => format!("{point}: {option}"),
        }
    }
}
