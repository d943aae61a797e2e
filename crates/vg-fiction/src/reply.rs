//! Turn output.

use std::fmt;

use crate::narrative::Decision;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player died.
    Defeat,
    /// The player joined Seren Taal.
    Alliance,
    /// Seren Taal fell and Aurelion was freed.
    Liberation,
    /// The player quit.
    Abandoned,
}

impl Ending {
    /// Whether the run ended in the player's death.
    pub fn is_defeat(&self) -> bool {
        matches!(self, Self::Defeat)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Defeat => "defeat",
            Self::Alliance => "the alliance of light",
            Self::Liberation => "liberation",
            Self::Abandoned => "abandoned",
        })
    }
}

/// Text produced by a step of the game, plus any decisions it raised and
/// whether it ended the story.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Output lines, in order.
    pub lines: Vec<String>,
    /// Decision points raised, in order.
    pub raised: Vec<Decision>,
    /// Set when the story reached an ending.
    pub ending: Option<Ending>,
}

impl Reply {
    /// An empty reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// A reply holding one line.
    pub fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append several lines.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Raise a decision point.
    pub fn raise(&mut self, decision: Decision) {
        self.raised.push(decision);
    }

    /// Mark the story as ended. The first ending wins.
    pub fn end(&mut self, ending: Ending) {
        self.ending.get_or_insert(ending);
    }

    /// Merge another reply into this one.
    pub fn absorb(&mut self, other: Reply) {
        self.lines.extend(other.lines);
        self.raised.extend(other.raised);
        if let Some(ending) = other.ending {
            self.end(ending);
        }
    }

    /// The lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether there is nothing to print.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_keeps_order_and_first_ending() {
        let mut a = Reply::say("one");
        a.end(Ending::Alliance);
        let mut b = Reply::say("two");
        b.raise(Decision::ThroneOffer);
        b.end(Ending::Defeat);
        a.absorb(b);
        assert_eq!(a.text(), "one\ntwo");
        assert_eq!(a.raised, vec![Decision::ThroneOffer]);
        assert_eq!(a.ending, Some(Ending::Alliance));
    }
}
