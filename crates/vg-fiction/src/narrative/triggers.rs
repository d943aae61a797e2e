//! Side conditions checked once per turn, after the command has run.
//!
//! Every trigger is guarded by a story stage or a write-once tag, so running
//! the checks again on a later turn never repeats a transition, an ambush or
//! a prompt. Checks stop at the first one that raises a decision.

use vg_core::{
    Act, AurelionStage, Boss, Cover, GameState, Illusions, Map, RoomId, StatDelta, Survivor,
    VelyraStage,
};
use vg_mechanics::{Combat, Oracle, run_ambush};

use super::{Decision, acts, content};
use crate::error::FictionResult;
use crate::reply::{Ending, Reply};

const VELYRA_AMBUSH_REWARD: StatDelta = StatDelta {
    resources: 1,
    reputation: 1,
    ..StatDelta::NONE
};

const AURELION_AMBUSH_REWARD: StatDelta = StatDelta {
    moral: 1,
    reputation: 1,
    ..StatDelta::NONE
};

/// Losing both allies to Karn's last volley.
const NO_DOSE: StatDelta = StatDelta {
    moral: -2,
    reputation: 3,
    ..StatDelta::NONE
};

/// Run the per-turn checks. `arrived` is true when the player changed room
/// this turn.
pub fn run(
    state: &mut GameState,
    combat: &mut Combat,
    oracle: &mut dyn Oracle,
    arrived: bool,
) -> FictionResult<Reply> {
    let mut reply = Reply::new();

    if state.story.acknowledge(Boss::Vorn) && state.story.advance_velyra(VelyraStage::Arrived) {
        reply.push(
            "The propulsion drive roars back to life. You leave Eridani behind and follow \
             Yara's coordinates to Velyra IX.",
        );
        enter_act(state, &mut reply, Act::Velyra, acts::velyra)?;
        reply.raise(Decision::RebelStrategy);
        reply.raise(Decision::PrisonPlan);
        return Ok(reply);
    }

    if state.story.act() == Act::Velyra {
        if here_is(state, acts::CIVIL_QUARTER) && state.story.mark_velyra_ambush() {
            reply.push("Karn's drones drop from the rooftops!");
            let report = run_ambush(combat, state, oracle, content::velyra_ambush())?;
            reply.extend(report.lines);
            if !report.survived {
                return Ok(reply);
            }
            state.player.stats.apply(VELYRA_AMBUSH_REWARD);
            reply.push(format!(
                "The quarter cheers as the last drone falls ({VELYRA_AMBUSH_REWARD})."
            ));
        }

        if state.story.velyra() == VelyraStage::KarnFallen && state.story.survivor().is_none() {
            if state.player.inventory.contains(content::NANOMEDICINE) {
                reply.raise(Decision::NanomedicineDose);
                return Ok(reply);
            }
            state.story.choose_survivor(Survivor::Neither);
            state.player.stats.apply(NO_DOSE);
            reply.push(format!(
                "Karn's last volley caught Yara and Narek. Without medicine, you can only \
                 hold their hands. Velyra mourns its heroes ({NO_DOSE})."
            ));
            state.note("Yara and Narek died after Karn's fall.");
        }

        if state.story.velyra() == VelyraStage::Resolved
            && state.story.advance_aurelion(AurelionStage::Arrived)
        {
            reply.push(
                "Velyra is free. A coded signal from Aurelion Prime asks for help, \
                 and you set course for the city of light.",
            );
            enter_act(state, &mut reply, Act::Aurelion, acts::aurelion)?;
            reply.raise(Decision::CoverIdentity);
            return Ok(reply);
        }
    }

    if state.story.act() == Act::Aurelion {
        if here_is(state, acts::HOLOGRAM_QUARTER) && state.story.mark_aurelion_ambush() {
            let revealed = state.story.cover() == Some(Cover::Reveal);
            reply.push(if revealed {
                "The projections tear open. Specters hunt the outsider everyone saw arrive!"
            } else {
                "The projections tear open. Specters pour out of the light!"
            });
            let report = run_ambush(combat, state, oracle, content::aurelion_ambush(revealed))?;
            reply.extend(report.lines);
            if !report.survived {
                return Ok(reply);
            }
            state.player.stats.apply(AURELION_AMBUSH_REWARD);
            reply.push(format!(
                "The quarter flickers and steadies ({AURELION_AMBUSH_REWARD})."
            ));
        }

        if here_is(state, acts::THE_NODE) && state.story.illusions().is_none() {
            reply.raise(Decision::NodeIllusions);
            return Ok(reply);
        }

        if let Some(line) = aftermath(state).filter(|_| arrived) {
            reply.push(line);
        }

        if !state.story.guardians_cleared() && guardians_down(state)? {
            state.story.mark_guardians_cleared();
            reply.push("The last guardian dissolves. The great door to the throne room swings open.");
        }

        if here_is(state, acts::THRONE_ROOM)
            && state.story.throne().is_none()
            && !state.story.is_defeated(Boss::Taal)
        {
            reply.raise(Decision::ThroneOffer);
            return Ok(reply);
        }

        if state.story.acknowledge(Boss::Taal) {
            tracing::info!("liberation ending reached");
            reply.push(liberation(state));
            reply.end(Ending::Liberation);
        }
    }

    Ok(reply)
}

/// Why the player may not walk into `to`, if anything bars the way.
pub fn barred(state: &GameState, to: RoomId) -> FictionResult<Option<&'static str>> {
    let name = &state.map.room(to)?.name;
    if name == acts::THRONE_ROOM && !state.story.guardians_cleared() {
        return Ok(Some(
            "The great door is sealed. The White Guardians still stand watch.",
        ));
    }
    Ok(None)
}

fn enter_act(
    state: &mut GameState,
    reply: &mut Reply,
    act: Act,
    build: fn() -> FictionResult<(Map, RoomId)>,
) -> FictionResult<()> {
    let (map, entry) = build()?;
    state.install_act(map, entry)?;
    state.story.enter_act(act);
    state.note(format!("Arrived on {act}."));
    tracing::info!(%act, "act transition");
    reply.push(format!("=== {act} ==="));
    reply.push(state.describe_here()?);
    Ok(())
}

fn here_is(state: &GameState, name: &str) -> bool {
    state
        .current_room()
        .is_ok_and(|room| room.name.eq_ignore_ascii_case(name))
}

fn guardians_down(state: &GameState) -> FictionResult<bool> {
    let Some(palace) = state.map.find(acts::PALACE) else {
        return Ok(false);
    };
    let enemies = &state.map.room(palace)?.enemies;
    Ok(!enemies.is_empty() && enemies.iter().all(|e| !e.is_alive()))
}

/// How the city reacts to the Node decision as the player walks through it.
fn aftermath(state: &GameState) -> Option<&'static str> {
    let illusions = state.story.illusions()?;
    if here_is(state, acts::GOLDEN_DISTRICT) {
        return Some(match illusions {
            Illusions::Shattered => {
                "Citizens stand in the grey streets, blinking. Some weep. Some start to rebuild."
            }
            Illusions::Preserved => "The golden avenues shine as if nothing happened.",
        });
    }
    if here_is(state, acts::HOLOGRAM_QUARTER) {
        return Some(match illusions {
            Illusions::Shattered => "The projectors hang dead. Zekh is painting on real walls now.",
            Illusions::Preserved => "The projections hum, flawless again. The residents stop glitching.",
        });
    }
    None
}

fn liberation(state: &GameState) -> String {
    let with = match (state.story.yara_alive(), state.story.narek_alive()) {
        (true, true) => "Yara and Narek stand beside you",
        (true, false) => "Yara stands beside you",
        (false, true) => "Narek stands beside you",
        (false, false) => "You stand alone",
    };
    format!(
        "LIBERATION. Seren Taal's light is gone. {with} as Aurelion wakes to its own sky."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::PrisonPlan;
    use vg_mechanics::{FixedOracle, Multiplier};

    fn eridani() -> GameState {
        let (map, entry) = acts::eridani().unwrap();
        GameState::new("Orion Vale", 20, map, entry)
    }

    fn strong() -> FixedOracle {
        FixedOracle::new(Multiplier::Strong)
    }

    #[test]
    fn vorn_transition_runs_once() {
        let mut state = eridani();
        let mut combat = Combat::new();
        let mut oracle = strong();
        state.story.record_defeat(Boss::Vorn);

        let reply = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert_eq!(state.story.act(), Act::Velyra);
        assert_eq!(state.current_room().unwrap().name, acts::REBEL_BASE);
        assert_eq!(
            reply.raised,
            vec![Decision::RebelStrategy, Decision::PrisonPlan]
        );
        assert!(state.player.history().is_empty());

        let warehouses = state.map.find("Civil Warehouses").unwrap();
        state.player.location = warehouses;
        let again = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert!(again.raised.is_empty());
        assert_eq!(state.story.act(), Act::Velyra);
        assert_eq!(state.player.location, warehouses);
    }

    #[test]
    fn velyra_ambush_fires_once_and_cleans_up() {
        let (map, entry) = acts::velyra().unwrap();
        let mut state = GameState::new("Orion Vale", 20, map, entry);
        state.player.stats.attack = 200;
        let quarter = state.map.find(acts::CIVIL_QUARTER).unwrap();
        state.player.location = quarter;
        let mut combat = Combat::new();
        let mut oracle = strong();

        let reply = run(&mut state, &mut combat, &mut oracle, true).unwrap();
        assert!(reply.text().contains("drones drop"));
        assert!(state.story.velyra_ambush_done());
        assert!(state.current_room().unwrap().enemies.is_empty());
        assert_eq!(state.player.stats.resources, 1);

        let again = run(&mut state, &mut combat, &mut oracle, true).unwrap();
        assert!(!again.text().contains("drones drop"));
        assert_eq!(state.player.stats.resources, 1);
    }

    #[test]
    fn karn_without_dose_loses_both_allies() {
        let (map, entry) = acts::velyra().unwrap();
        let mut state = GameState::new("Orion Vale", 20, map, entry);
        state.story.enter_act(Act::Velyra);
        state.story.mark_velyra_ambush();
        state.story.choose_prison_plan(PrisonPlan::Robbery);
        state.story.record_defeat(Boss::Karn);
        let mut combat = Combat::new();
        let mut oracle = strong();

        let reply = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert_eq!(state.story.survivor(), Some(Survivor::Neither));
        assert_eq!(state.story.act(), Act::Aurelion);
        assert_eq!(reply.raised, vec![Decision::CoverIdentity]);

        let stats = state.player.stats;
        let location = state.player.location;
        let marker = vg_core::Item::new("Rebel Flare", "Left behind on arrival.");
        state.current_room_mut().unwrap().items.push(marker);

        let again = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert!(again.raised.is_empty());
        assert!(again.is_empty());
        assert_eq!(state.player.stats, stats);
        assert_eq!(state.player.location, location);
        assert_eq!(state.current_room().unwrap().name, acts::GOLDEN_DISTRICT);
        assert!(
            state
                .current_room()
                .unwrap()
                .items
                .iter()
                .any(|item| item.is_named("Rebel Flare"))
        );
    }

    #[test]
    fn karn_with_dose_raises_the_choice() {
        let (map, entry) = acts::velyra().unwrap();
        let mut state = GameState::new("Orion Vale", 20, map, entry);
        state.story.enter_act(Act::Velyra);
        state.story.record_defeat(Boss::Karn);
        state.player.inventory.add(content::nanomedicine());
        let mut combat = Combat::new();
        let mut oracle = strong();

        let reply = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert_eq!(reply.raised, vec![Decision::NanomedicineDose]);
        assert_eq!(state.story.survivor(), None);
        assert_eq!(state.story.act(), Act::Velyra);
    }

    #[test]
    fn throne_is_barred_until_guardians_fall() {
        let (map, entry) = acts::aurelion().unwrap();
        let mut state = GameState::new("Orion Vale", 20, map, entry);
        state.story.enter_act(Act::Aurelion);
        let throne = state.map.find(acts::THRONE_ROOM).unwrap();
        assert!(barred(&state, throne).unwrap().is_some());

        let palace = state.map.find(acts::PALACE).unwrap();
        for guardian in &mut state.map.room_mut(palace).unwrap().enemies {
            guardian.kill();
        }
        let mut combat = Combat::new();
        let mut oracle = strong();
        let reply = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert!(reply.text().contains("swings open"));
        assert_eq!(barred(&state, throne).unwrap(), None);
    }

    #[test]
    fn taal_falls_to_liberation() {
        let (map, entry) = acts::aurelion().unwrap();
        let mut state = GameState::new("Orion Vale", 20, map, entry);
        state.story.enter_act(Act::Aurelion);
        state.story.record_defeat(Boss::Taal);
        let mut combat = Combat::new();
        let mut oracle = strong();

        let reply = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert_eq!(reply.ending, Some(Ending::Liberation));
        assert!(reply.text().contains("Yara stands beside you"));
        let again = run(&mut state, &mut combat, &mut oracle, false).unwrap();
        assert_eq!(again.ending, None);
    }
}
