//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        tracing::trace!(entry = %entry.summary(), "journal");
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The history view: one `- summary` line per entry.
    pub fn history(&self) -> String {
        if self.entries.is_empty() {
            return "History is empty.".to_string();
        }
        let mut out = String::from("History:");
        for entry in &self.entries {
            out.push_str(&format!("\n- {}", entry.summary()));
        }
        out
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Voidgate Journal\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M:%S");
            match entry {
                JournalEntry::Travel { from, to, .. } => {
                    out.push_str(&format!("- `{time}` *{from}* → *{to}*\n"));
                }
                JournalEntry::Narrative { text, .. } => {
                    out.push_str(&format!("- `{time}` {text}\n"));
                }
                JournalEntry::Combat { text, .. } => {
                    out.push_str(&format!("- `{time}` **Combat**: {text}\n"));
                }
                JournalEntry::Decision { point, option, .. } => {
                    out.push_str(&format!("- `{time}` **{point}**: {option}\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Voidgate Journal\n================\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "[{}] {}\n",
                entry.timestamp().format("%H:%M:%S"),
                entry.summary()
            ));
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Journal {
        let mut j = Journal::new();
        j.append(JournalEntry::travel("Eridani Prime", "Mining Outpost"));
        j.append(JournalEntry::narrative("Met Ralen."));
        j.append(JournalEntry::decision("The crash", "Rescue the survivors"));
        j.append(JournalEntry::combat("Captain Vorn defeated."));
        j
    }

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.history(), "History is empty.");
    }

    #[test]
    fn history_lists_summaries_in_order() {
        let j = sample();
        assert_eq!(j.len(), 4);
        assert_eq!(
            j.history(),
            "History:\n- Travelled from Eridani Prime to Mining Outpost\n- Met Ralen.\n\
             - The crash: Rescue the survivors\n- Combat: Captain Vorn defeated."
        );
    }

    #[test]
    fn markdown_export() {
        let md = sample().export_markdown();
        assert!(md.starts_with("# Voidgate Journal"));
        assert!(md.contains("**The crash**: Rescue the survivors"));
        assert!(md.contains("**Combat**: Captain Vorn defeated."));
    }

    #[test]
    fn text_export() {
        let text = sample().export_text();
        assert!(text.contains("] Met Ralen.\n"));
    }

    #[test]
    fn json_export_is_parseable() {
        let json = sample().export_json().unwrap();
        let back: Journal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 4);
    }
}
