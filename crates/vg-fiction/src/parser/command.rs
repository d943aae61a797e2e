//! Command parsing for player input.

use crate::error::{FictionError, FictionResult};

use super::resolver::did_you_mean;

/// A verb the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Return to the previous room.
    Back,
    /// Describe the current room.
    Look,
    /// Pick an item up.
    Take,
    /// Put an item down.
    Drop,
    /// List carried items.
    Inventory,
    /// Examine an item.
    Check,
    /// Speak to an NPC.
    Talk,
    /// Strike an enemy.
    Attack,
    /// Instantly defeat an enemy.
    Cheat,
    /// Use a carried item.
    Use,
    /// Show the stat block.
    Status,
    /// Show the journal summary.
    History,
    /// Show the tactical AI tally.
    Ai,
    /// Inspect an NPC or enemy.
    Analyze,
    /// Export the journal.
    Journal,
    /// List the verbs.
    Help,
    /// Leave the game.
    Quit,
}

/// Verb synonyms for command parsing, English and French.
const ALIASES: &[(Verb, &[&str])] = &[
    (Verb::Go, &["go", "aller", "g"]),
    (Verb::Back, &["back", "retour"]),
    (Verb::Look, &["look", "observer", "o", "l"]),
    (Verb::Take, &["take", "prendre", "p"]),
    (Verb::Drop, &["drop", "jeter", "j"]),
    (Verb::Inventory, &["inventory", "inventaire", "inv", "i"]),
    (Verb::Check, &["check", "examiner", "e"]),
    (Verb::Talk, &["talk", "parler", "t"]),
    (Verb::Attack, &["attack", "attaquer", "a"]),
    (Verb::Cheat, &["cheat", "tricher", "b"]),
    (Verb::Use, &["use", "utiliser", "u"]),
    (Verb::Status, &["status", "statut", "s"]),
    (Verb::History, &["history", "historique", "h"]),
    (Verb::Ai, &["ai", "ia"]),
    (Verb::Analyze, &["analyze", "analyser", "x"]),
    (Verb::Journal, &["journal"]),
    (Verb::Help, &["help", "aide", "?"]),
    (Verb::Quit, &["quit", "quitter", "exit", "q"]),
];

impl Verb {
    /// Look up a verb by any of its aliases (case-insensitive).
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&word.as_str()))
            .map(|(verb, _)| *verb)
    }

    /// Canonical English name.
    pub fn name(&self) -> &'static str {
        ALIASES
            .iter()
            .find(|(verb, _)| verb == self)
            .and_then(|(_, aliases)| aliases.first().copied())
            .unwrap_or("?")
    }

    /// Whether the verb may be used mid-fight.
    pub fn allowed_in_combat(&self) -> bool {
        matches!(
            self,
            Self::Attack
                | Self::Cheat
                | Self::Use
                | Self::Status
                | Self::Inventory
                | Self::Check
                | Self::Analyze
                | Self::Ai
                | Self::Help
        )
    }
}

/// A parsed player command: a verb and the rest of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// What to do.
    pub verb: Verb,
    /// Everything after the verb, trimmed. `None` when empty.
    pub arg: Option<String>,
}

impl Command {
    /// The argument, or `MissingArgument` with the given prompt.
    pub fn require_arg(&self, prompt: &'static str) -> FictionResult<&str> {
        self.arg.as_deref().ok_or(FictionError::MissingArgument(prompt))
    }
}

/// Parse a line into a command. Blank input yields `Ok(None)`.
pub fn parse_command(input: &str) -> FictionResult<Option<Command>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or_default();
    let arg = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    match Verb::from_word(word) {
        Some(verb) => Ok(Some(Command { verb, arg })),
        None => {
            let known = ALIASES.iter().flat_map(|(_, aliases)| aliases.iter().copied());
            Err(FictionError::UnknownCommand {
                verb: word.to_string(),
                hint: did_you_mean(word, known.filter(|a| a.len() > 2)),
            })
        }
    }
}

/// The standing verb list shown after each turn.
pub fn help_line() -> String {
    "Commands: go <dir>, back, look, take <item>, drop <item>, inventory, check <item>, \
     talk <npc>, attack <enemy>, cheat <enemy>, use <item>, status, history, ai, \
     analyze <target>, journal [md|text|json], help, quit"
        .to_string()
}

/// The verbs allowed in combat, comma separated.
pub fn combat_verbs() -> String {
    ALIASES
        .iter()
        .filter(|(verb, _)| verb.allowed_in_combat())
        .map(|(verb, _)| verb.name())
        .collect::<Vec<_>>()
        .join(", ")
}
