//! Named decision points.
//!
//! A decision is raised by a script or trigger and held by the session until
//! the player answers it. Resolving writes the matching story tag, so a
//! decision that has already been settled resolves to a no-op.

use vg_core::{
    Cover, CrashChoice, GameState, Illusions, JournalEntry, MerchantDeal, StatDelta, Story,
    Strategy, Survivor, ThroneAnswer, UniqueItem,
};

use super::{content, corruption};
use crate::reply::{Ending, Reply};

/// One of the two options of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Option 1.
    First,
    /// Option 2.
    Second,
}

/// A point where the story waits for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Right after the crash: rescue or salvage.
    CrashLanding,
    /// The merchant wants a crew member for the crystal.
    MerchantOffer,
    /// Yara asks how to take on Karn.
    RebelStrategy,
    /// How to open the central prison.
    PrisonPlan,
    /// The only nanomedicine dose, and two dying allies.
    NanomedicineDose,
    /// How to enter Aurelion.
    CoverIdentity,
    /// Whether to shut down the illusion engine.
    NodeIllusions,
    /// Seren Taal's offer.
    ThroneOffer,
}

impl Decision {
    /// Short label for logs and the journal.
    pub fn title(&self) -> &'static str {
        match self {
            Self::CrashLanding => "Crash landing",
            Self::MerchantOffer => "The merchant's offer",
            Self::RebelStrategy => "Rebel strategy",
            Self::PrisonPlan => "Prison plan",
            Self::NanomedicineDose => "The last dose",
            Self::CoverIdentity => "Cover identity",
            Self::NodeIllusions => "The Node",
            Self::ThroneOffer => "Taal's offer",
        }
    }

    fn situation(&self) -> &'static str {
        match self {
            Self::CrashLanding => {
                "Smoke pours from the hull. Survivors are trapped in the aft section, \
                 and the cargo bay is still intact."
            }
            Self::MerchantOffer => {
                "\"The crystal is yours,\" the merchant purrs, \
                 \"for one of your crew. I have buyers for strong backs.\""
            }
            Self::RebelStrategy => {
                "Yara spreads a map of Karn's defenses. \"Do we study them first, \
                 or hit them before they see us coming?\""
            }
            Self::PrisonPlan => {
                "\"Narek is in the central prison,\" Yara says. \"We need supplies to break \
                 him out. Raid the civil warehouses, or buy Karn's general?\""
            }
            Self::NanomedicineDose => {
                "Karn's last volley tore through your allies. Yara and Narek are both dying, \
                 and you hold a single dose of nanomedicine."
            }
            Self::CoverIdentity => {
                "Aurelion's gates shine ahead. Citizens here are scanned at every corner."
            }
            Self::NodeIllusions => {
                "The illusion engine hums before you. One command would show every citizen \
                 the ruins they actually live in."
            }
            Self::ThroneOffer => {
                "Seren Taal rises. \"You have come far, Captain. Rule beside me, \
                 and no one on this world will ever suffer the truth again.\""
            }
        }
    }

    /// The two option labels.
    pub fn options(&self) -> [&'static str; 2] {
        match self {
            Self::CrashLanding => ["Rescue the survivors", "Salvage the wreck"],
            Self::MerchantOffer => ["Trade a crew member", "Refuse"],
            Self::RebelStrategy => ["Study the enemy first", "Attack first"],
            Self::PrisonPlan => ["Rob the civil warehouses", "Corrupt Karn's general"],
            Self::NanomedicineDose => ["Save Yara", "Save Narek"],
            Self::CoverIdentity => ["Infiltrate as a citizen", "Reveal yourself"],
            Self::NodeIllusions => ["Shatter the illusions", "Preserve them"],
            Self::ThroneOffer => ["Accept the alliance", "Refuse and fight"],
        }
    }

    /// The situation followed by the numbered options.
    pub fn prompt(&self) -> String {
        let [first, second] = self.options();
        format!(
            "[{}] {}\n  1) {first}\n  2) {second}",
            self.title(),
            self.situation()
        )
    }

    /// Parse an answer. Only `1` and `2` are accepted.
    pub fn parse_choice(input: &str) -> Option<Choice> {
        match input.trim() {
            "1" => Some(Choice::First),
            "2" => Some(Choice::Second),
            _ => None,
        }
    }

    /// Whether the story already holds an answer to this decision.
    pub fn is_settled(&self, story: &Story) -> bool {
        match self {
            Self::CrashLanding => story.crash().is_some(),
            Self::MerchantOffer => story.merchant().is_some(),
            Self::RebelStrategy => story.strategy().is_some(),
            Self::PrisonPlan => story.prison_plan().is_some(),
            Self::NanomedicineDose => story.survivor().is_some(),
            Self::CoverIdentity => story.cover().is_some(),
            Self::NodeIllusions => story.illusions().is_some(),
            Self::ThroneOffer => story.throne().is_some(),
        }
    }

    fn label(&self, choice: Choice) -> &'static str {
        let [first, second] = self.options();
        match choice {
            Choice::First => first,
            Choice::Second => second,
        }
    }
}

const RESCUE: StatDelta = StatDelta {
    moral: 2,
    attack: 1,
    resources: -2,
    ..StatDelta::NONE
};

const SALVAGE: StatDelta = StatDelta {
    defense: 3,
    resources: 4,
    moral: -2,
    ..StatDelta::NONE
};

const SACRIFICE: StatDelta = StatDelta {
    moral: -3,
    resources: 2,
    ..StatDelta::NONE
};

const REFUSE_TRADE: StatDelta = StatDelta {
    moral: 1,
    ..StatDelta::NONE
};

const STUDY: StatDelta = StatDelta {
    defense: 2,
    moral: -1,
    reputation: 2,
    ..StatDelta::NONE
};

const STRIKE_FIRST: StatDelta = StatDelta {
    defense: -1,
    resources: -1,
    attack: 2,
    moral: 1,
    reputation: 2,
};

/// Damage taken storming Karn's outer lines.
const STRIKE_FIRST_WOUND: u32 = 15;

const ROBBERY: StatDelta = StatDelta {
    resources: 4,
    attack: 1,
    moral: -3,
    reputation: -4,
    ..StatDelta::NONE
};

const SAVE_YARA: StatDelta = StatDelta {
    moral: 1,
    reputation: 1,
    attack: 1,
    ..StatDelta::NONE
};

const SAVE_NAREK: StatDelta = StatDelta {
    moral: -1,
    reputation: 2,
    defense: 1,
    ..StatDelta::NONE
};

const INFILTRATE: StatDelta = StatDelta {
    defense: 1,
    reputation: 2,
    moral: -1,
    ..StatDelta::NONE
};

const REVEAL: StatDelta = StatDelta {
    attack: 1,
    reputation: -2,
    moral: 1,
    ..StatDelta::NONE
};

/// Damage taken from the patrols that answer a public arrival.
const REVEAL_WOUND: u32 = 15;

const SHATTER: StatDelta = StatDelta {
    moral: 2,
    reputation: -1,
    ..StatDelta::NONE
};

const PRESERVE: StatDelta = StatDelta {
    moral: -2,
    reputation: 1,
    ..StatDelta::NONE
};

const ALLIANCE: StatDelta = StatDelta {
    moral: -5,
    reputation: -5,
    attack: 2,
    defense: 1,
    ..StatDelta::NONE
};

fn apply(state: &mut GameState, reply: &mut Reply, delta: StatDelta) {
    state.player.stats.apply(delta);
    reply.push(format!("({delta})"));
}

fn wound(state: &mut GameState, reply: &mut Reply, raw: u32) {
    let taken = state.player.stats.take_damage(raw);
    reply.push(format!("You take {taken} damage."));
}

/// Apply the consequences of answering `decision` with `choice`.
///
/// `roll` is a uniform draw in `[0, 1)`, used only by the corruption attempt.
/// Resolving a decision that is already settled changes nothing.
pub fn resolve(decision: Decision, choice: Choice, state: &mut GameState, roll: f64) -> Reply {
    if decision.is_settled(&state.story) {
        return Reply::say(format!("{} has already been decided.", decision.title()));
    }
    tracing::debug!(?decision, ?choice, "decision resolved");

    let mut reply = Reply::new();
    match (decision, choice) {
        (Decision::CrashLanding, choice) => {
            match choice {
                Choice::First => {
                    state.story.choose_crash(CrashChoice::RescueSurvivors);
                    reply.push(
                        "You haul three crew members out of the burning aft. \
                         Supplies are lost in the fire.",
                    );
                    apply(state, &mut reply, RESCUE);
                }
                Choice::Second => {
                    state.story.choose_crash(CrashChoice::SalvageWreck);
                    reply.push(
                        "You strip the cargo bay. The screams from the aft fall silent \
                         before you finish.",
                    );
                    apply(state, &mut reply, SALVAGE);
                    state.player.inventory.add(content::stabilized_module());
                    reply.push("You salvaged a Stabilized Energy Module.");
                }
            }
            if state.story.obtain_unique(UniqueItem::Translator) {
                state.player.inventory.add(content::translator_chip());
                reply.push(
                    "In the wreckage you find a Neural Translator Chip and graft it on. \
                     The local chatter starts to make sense.",
                );
            }
        }
        (Decision::MerchantOffer, Choice::First) => {
            state.story.settle_merchant(MerchantDeal::Sacrificed);
            reply.push("The merchant's guards lead your crew member away without a word.");
            apply(state, &mut reply, SACRIFICE);
            if state.story.obtain_unique(UniqueItem::PropulsionCrystal) {
                state.player.inventory.add(content::propulsion_crystal());
                reply.push("You receive the Propulsion Crystal.");
            }
        }
        (Decision::MerchantOffer, Choice::Second) => {
            state.story.settle_merchant(MerchantDeal::Refused);
            reply.push(
                "You refuse. A hooded woman at the next stall gives you a long look: \
                 Yara has noticed you.",
            );
            apply(state, &mut reply, REFUSE_TRADE);
        }
        (Decision::RebelStrategy, Choice::First) => {
            state.story.choose_strategy(Strategy::StudyFirst);
            reply.push("You spend days mapping patrol routes. The rebels trust your patience.");
            apply(state, &mut reply, STUDY);
        }
        (Decision::RebelStrategy, Choice::Second) => {
            state.story.choose_strategy(Strategy::AttackFirst);
            reply.push("You lead a raid on Karn's outer lines. It works, at a price.");
            wound(state, &mut reply, STRIKE_FIRST_WOUND);
            apply(state, &mut reply, STRIKE_FIRST);
        }
        (Decision::PrisonPlan, Choice::First) => {
            state.story.choose_prison_plan(vg_core::PrisonPlan::Robbery);
            reply.push(
                "You empty the civil warehouses. The prison falls, \
                 but families will go hungry this winter.",
            );
            apply(state, &mut reply, ROBBERY);
        }
        (Decision::PrisonPlan, Choice::Second) => {
            reply.absorb(corruption::attempt(state, roll));
        }
        (Decision::NanomedicineDose, Choice::First) => {
            state.story.choose_survivor(Survivor::Yara);
            consume_nanomedicine(state);
            reply.push("You inject Yara. Narek's hand goes slack in yours.");
            apply(state, &mut reply, SAVE_YARA);
        }
        (Decision::NanomedicineDose, Choice::Second) => {
            state.story.choose_survivor(Survivor::Narek);
            consume_nanomedicine(state);
            reply.push("You inject Narek. Yara smiles once, and is gone.");
            apply(state, &mut reply, SAVE_NAREK);
        }
        (Decision::CoverIdentity, Choice::First) => {
            state.story.choose_cover(Cover::Infiltrate);
            reply.push("A forged citizen chip gets you through the gates unnoticed.");
            apply(state, &mut reply, INFILTRATE);
        }
        (Decision::CoverIdentity, Choice::Second) => {
            state.story.choose_cover(Cover::Reveal);
            reply.push("You walk in under your own name. The patrols answer at once.");
            wound(state, &mut reply, REVEAL_WOUND);
            apply(state, &mut reply, REVEAL);
        }
        (Decision::NodeIllusions, Choice::First) => {
            state.story.choose_illusions(Illusions::Shattered);
            reply.push("The prisms go dark. Across the city, people see their world for the first time.");
            apply(state, &mut reply, SHATTER);
        }
        (Decision::NodeIllusions, Choice::Second) => {
            state.story.choose_illusions(Illusions::Preserved);
            reply.push("You leave the engine running. The city keeps its golden dream.");
            apply(state, &mut reply, PRESERVE);
        }
        (Decision::ThroneOffer, Choice::First) => {
            state.story.answer_throne(ThroneAnswer::Alliance);
            reply.push(
                "You kneel. Light floods your veins, and the city below dims \
                 for one more tyrant.",
            );
            apply(state, &mut reply, ALLIANCE);
            reply.push("THE ALLIANCE OF LIGHT. Aurelion will never wake.");
            reply.end(Ending::Alliance);
        }
        (Decision::ThroneOffer, Choice::Second) => {
            state.story.answer_throne(ThroneAnswer::Defiance);
            reply.push("\"Then burn with your truth.\" Seren Taal descends. Attack Seren Taal!");
        }
    }

    state
        .journal
        .append(JournalEntry::decision(decision.title(), decision.label(choice)));
    reply
}

fn consume_nanomedicine(state: &mut GameState) {
    if state.player.inventory.remove(content::NANOMEDICINE).is_err() {
        tracing::debug!("nanomedicine already spent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::{Description, Fact, Map, Room, Stats};

    fn fresh() -> GameState {
        let mut map = Map::new();
        let id = map.add(Room::new("Crash Site", Description::new("Smoke.")));
        GameState::new("Orion Vale", 20, map, id)
    }

    #[test]
    fn rescue_applies_deltas_and_grants_translator() {
        let mut state = fresh();
        let before = state.player.stats;
        resolve(Decision::CrashLanding, Choice::First, &mut state, 0.0);
        let stats = state.player.stats;
        assert_eq!(stats.moral, before.moral + 2);
        assert_eq!(stats.attack, before.attack + 1);
        // resources start at zero and are floored there
        assert_eq!(stats.resources, 0);
        assert!(state.player.inventory.contains("Neural Translator Chip"));
        assert!(state.story.holds(Fact::RescuedSurvivors));
    }

    #[test]
    fn salvage_also_grants_translator() {
        let mut state = fresh();
        resolve(Decision::CrashLanding, Choice::Second, &mut state, 0.0);
        assert!(state.player.inventory.contains("Neural Translator Chip"));
        assert!(state.player.inventory.contains("Stabilized Energy Module"));
        assert_eq!(state.player.stats.resources, 4);
        assert_eq!(state.player.stats.defense, Stats::default().defense + 3);
    }

    #[test]
    fn settled_decision_is_a_noop() {
        let mut state = fresh();
        resolve(Decision::CrashLanding, Choice::First, &mut state, 0.0);
        let stats = state.player.stats;
        let items = state.player.inventory.items().len();
        let entries = state.journal.len();

        let reply = resolve(Decision::CrashLanding, Choice::Second, &mut state, 0.0);
        assert!(reply.text().contains("already been decided"));
        assert_eq!(state.player.stats, stats);
        assert_eq!(state.player.inventory.items().len(), items);
        assert_eq!(state.journal.len(), entries);
        assert!(!state.story.holds(Fact::SalvagedWreck));
    }

    #[test]
    fn sacrifice_hands_over_the_crystal_once() {
        let mut state = fresh();
        resolve(Decision::MerchantOffer, Choice::First, &mut state, 0.0);
        assert!(state.player.inventory.contains("Propulsion Crystal"));
        assert!(state.story.holds(Fact::MerchantSacrificed));
        assert!(state.story.holds(Fact::HasCrystal));
    }

    #[test]
    fn alliance_ends_the_story() {
        let mut state = fresh();
        let reply = resolve(Decision::ThroneOffer, Choice::First, &mut state, 0.0);
        assert_eq!(reply.ending, Some(Ending::Alliance));
        assert!(state.story.holds(Fact::AllianceAccepted));

        let mut state = fresh();
        let reply = resolve(Decision::ThroneOffer, Choice::Second, &mut state, 0.0);
        assert_eq!(reply.ending, None);
    }

    #[test]
    fn saving_one_ally_loses_the_other() {
        let mut state = fresh();
        state.story.choose_prison_plan(vg_core::PrisonPlan::Robbery);
        state.player.inventory.add(content::nanomedicine());
        resolve(Decision::NanomedicineDose, Choice::Second, &mut state, 0.0);
        assert!(state.story.narek_alive());
        assert!(!state.story.yara_alive());
        assert!(!state.player.inventory.contains(content::NANOMEDICINE));
    }

    #[test]
    fn choices_parse_strictly() {
        assert_eq!(Decision::parse_choice(" 1 "), Some(Choice::First));
        assert_eq!(Decision::parse_choice("2"), Some(Choice::Second));
        assert_eq!(Decision::parse_choice("3"), None);
        assert_eq!(Decision::parse_choice("yes"), None);
    }

    #[test]
    fn decisions_are_journaled() {
        let mut state = fresh();
        resolve(Decision::CoverIdentity, Choice::First, &mut state, 0.0);
        let last = state.journal.entries().last().unwrap();
        assert_eq!(last.summary(), "Cover identity: Infiltrate as a citizen");
    }
}
