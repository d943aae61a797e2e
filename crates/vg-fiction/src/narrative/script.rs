//! Stage-based NPC conversations.
//!
//! Each script checks the story from its latest stage back to its earliest
//! and answers for the first stage that matches. Side effects only happen on
//! first contact with a stage, through the story's write-once setters or by
//! raising a decision.

use vg_core::{Boss, Cover, GameState, MerchantDeal, PrisonPlan, ScriptId, Strategy};

use super::Decision;
use crate::reply::Reply;

/// Resources Malek needs before he will patch your gear.
const MALEK_PRICE: u32 = 3;

/// Run a scripted conversation against the current state.
pub fn run(script: ScriptId, state: &mut GameState) -> Reply {
    tracing::debug!(?script, "script runs");
    match script {
        ScriptId::Ralen => ralen(state),
        ScriptId::Malek => malek(state),
        ScriptId::Merchant => merchant(state),
        ScriptId::YaraEridani => yara_eridani(state),
        ScriptId::YaraVelyra => yara_velyra(state),
        ScriptId::Nommera => nommera(state),
        ScriptId::Narek => narek(state),
        ScriptId::GildedCitizen => gilded_citizen(state),
        ScriptId::GlitchedResident => glitched_resident(state),
    }
}

fn ralen(state: &mut GameState) -> Reply {
    if state.story.is_defeated(Boss::Vorn) {
        return Reply::say("Ralen: The port is open. Go, Captain, before someone worse takes Vorn's place.");
    }
    if state.story.met_ralen() {
        return Reply::say("Ralen: East, always east. The outpost, the market, then Vorn's fortress.");
    }
    state.story.meet_ralen();
    state.note("Met Ralen, a scout of Eridani.");
    Reply::say(
        "Ralen: You fell out of the sky in one piece? Lucky. Captain Vorn owns the only \
         working port on this rock. Malek at the mining outpost might help you, if you \
         bring him something worth his time.",
    )
}

fn malek(state: &GameState) -> Reply {
    if state.player.stats.resources >= MALEK_PRICE {
        return Reply::say(
            "Malek: You've got supplies, good. The merchant in the labyrinth market has a \
             propulsion crystal, and Vorn's men want it too. Watch your back there.",
        );
    }
    Reply::say(format!(
        "Malek: No supplies, no talk. Come back with at least {MALEK_PRICE} resources."
    ))
}

fn merchant(state: &GameState) -> Reply {
    match state.story.merchant() {
        Some(MerchantDeal::Sacrificed) => {
            Reply::say("Merchant: A pleasure doing business. Your friend works hard, I hear.")
        }
        Some(MerchantDeal::Refused) => Reply::say(
            "Merchant: No deal, no crystal. Perhaps Vorn will sell it to you. He won't.",
        ),
        None => {
            let mut reply = Reply::say("Merchant: Ah, the crashed captain. I have what you need.");
            reply.raise(Decision::MerchantOffer);
            reply
        }
    }
}

fn yara_eridani(state: &GameState) -> Reply {
    if state.story.is_defeated(Boss::Vorn) {
        return Reply::say("Yara: Vorn is finished. My people on Velyra need a pilot like you.");
    }
    if state.story.merchant() == Some(MerchantDeal::Refused) {
        return Reply::say(
            "Yara: You wouldn't sell your crew. That's rare out here. Vorn keeps the crystal's \
             twin in his fortress. Break him and I'll show you a war worth fighting.",
        );
    }
    Reply::say("The hooded woman turns away without a word.")
}

fn yara_velyra(state: &GameState) -> Reply {
    if state.story.is_defeated(Boss::Karn) {
        return Reply::say("Yara: Karn is dead and Velyra breathes again. We owe you everything.");
    }
    if let Some(plan) = state.story.prison_plan() {
        return Reply::say(match plan {
            PrisonPlan::Corruption { .. } => {
                "Yara: The missiles did their work. Narek is out. Now the citadel."
            }
            PrisonPlan::Robbery => {
                "Yara: Narek is free, but the quarter won't forget whose bread we took. \
                 Finish this at the citadel."
            }
        });
    }
    let mut reply = Reply::new();
    match state.story.strategy() {
        Some(strategy) => {
            reply.push(match strategy {
                Strategy::StudyFirst => "Yara: Your reconnaissance holds up. Now, Narek.",
                Strategy::AttackFirst => "Yara: The raid bought us time. Now, Narek.",
            });
            reply.raise(Decision::PrisonPlan);
        }
        None => {
            reply.push("Yara: Good, you're here. We move against Karn tonight.");
            reply.raise(Decision::RebelStrategy);
        }
    }
    reply
}

fn nommera(state: &GameState) -> Reply {
    match state.story.prison_plan() {
        Some(PrisonPlan::Robbery) => {
            Reply::say("Nommera: You emptied my warehouses. Children will starve for your war.")
        }
        Some(PrisonPlan::Corruption { .. }) => Reply::say(
            "Nommera: The general is bought, they say. At least you didn't take our grain.",
        ),
        None => Reply::say("Nommera: These stores feed the whole quarter. Keep your hands off them."),
    }
}

fn narek(state: &GameState) -> Reply {
    match state.story.prison_plan() {
        None => Reply::say("Narek stares at you through the bars, too weak to speak."),
        Some(_) if !state.story.narek_alive() => {
            Reply::say("Narek lies still. There is nothing left to say.")
        }
        Some(PrisonPlan::Robbery) => {
            Reply::say("Narek: Free, on stolen bread. I'll carry that. Let's end Karn.")
        }
        Some(PrisonPlan::Corruption { .. }) => {
            Reply::say("Narek: Missiles through my cell wall. Subtle, Captain. Let's end Karn.")
        }
    }
}

fn gilded_citizen(state: &GameState) -> Reply {
    match state.story.cover() {
        Some(Cover::Infiltrate) => Reply::say(
            "Gilded Citizen: Welcome home, neighbour! Isn't the light beautiful today?",
        ),
        Some(Cover::Reveal) => {
            Reply::say("Gilded Citizen: You're the outsider. Please, leave before the guardians come.")
        }
        None => Reply::say("Gilded Citizen: Everything is perfect. Everything is perfect."),
    }
}

fn glitched_resident(state: &GameState) -> Reply {
    if state.story.aurelion_ambush_done() {
        return Reply::say(
            "Glitched Resident: The specters are gone... I can see the cracks in the walls now. \
             The Node, further east. It makes the light.",
        );
    }
    Reply::say("Glitched Resident: Be-be-beautiful day. Don't look at the cor-corners.")
}
