//! Stationary NPCs and their dialogue behavior.

/// Identifies a scripted conversation. The narrative engine maps each id to a
/// stage function over the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptId {
    /// Ralen, the scout met after the crash.
    Ralen,
    /// Malek, the outpost engineer.
    Malek,
    /// The market trader with the crystal deal.
    Merchant,
    /// Yara on Eridani, before and after Vorn.
    YaraEridani,
    /// Yara on Velyra IX, the rebel leader.
    YaraVelyra,
    /// Nommera, keeper of the civil warehouses.
    Nommera,
    /// Narek, prisoner of the central prison.
    Narek,
    /// A citizen of the golden district.
    GildedCitizen,
    /// A resident of the hologram quarter whose projection flickers.
    GlitchedResident,
}

/// How a character responds to `talk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialogue {
    /// Fixed lines, one per interaction, wrapping around.
    Cyclic {
        /// The lines in order.
        messages: Vec<String>,
        /// Index of the next line to say.
        next: usize,
    },
    /// Stage-based conversation resolved by the narrative engine.
    Scripted(ScriptId),
}

/// What a character produced when spoken to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// A finished line of text.
    Line(String),
    /// The conversation must be resolved by the given script.
    Script(ScriptId),
}

/// A stationary NPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Text shown by `analyze`.
    pub description: String,
    /// Dialogue behavior.
    pub dialogue: Dialogue,
}

impl Character {
    /// A character cycling through fixed lines.
    pub fn cyclic<S: Into<String>>(
        name: impl Into<String>,
        description: impl Into<String>,
        messages: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            dialogue: Dialogue::Cyclic {
                messages: messages.into_iter().map(Into::into).collect(),
                next: 0,
            },
        }
    }

    /// A character driven by a narrative script.
    pub fn scripted(
        name: impl Into<String>,
        description: impl Into<String>,
        script: ScriptId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            dialogue: Dialogue::Scripted(script),
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Speak once. Cyclic dialogue advances its index modulo the line count.
    pub fn talk(&mut self) -> Utterance {
        match &mut self.dialogue {
            Dialogue::Cyclic { messages, next } => {
                if messages.is_empty() {
                    return Utterance::Line(format!("{} stays silent.", self.name));
                }
                let line = format!("{}: {}", self.name, messages[*next % messages.len()]);
                *next = (*next + 1) % messages.len();
                Utterance::Line(line)
            }
            Dialogue::Scripted(script) => Utterance::Script(*script),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_dialogue_wraps() {
        let mut tzenn = Character::cyclic("Tzenn", "An old sage.", ["One.", "Two."]);
        assert_eq!(tzenn.talk(), Utterance::Line("Tzenn: One.".into()));
        assert_eq!(tzenn.talk(), Utterance::Line("Tzenn: Two.".into()));
        assert_eq!(tzenn.talk(), Utterance::Line("Tzenn: One.".into()));
    }

    #[test]
    fn empty_dialogue_is_silent() {
        let mut mute = Character::cyclic("Statue", "", Vec::<String>::new());
        assert_eq!(mute.talk(), Utterance::Line("Statue stays silent.".into()));
    }

    #[test]
    fn scripted_dialogue_defers() {
        let mut ralen = Character::scripted("Ralen", "A scout.", ScriptId::Ralen);
        assert_eq!(ralen.talk(), Utterance::Script(ScriptId::Ralen));
        assert!(ralen.is_named("RALEN"));
    }
}
