//! Bribing Karn's general for missiles.
//!
//! Both outcomes open the prison; a failed bribe costs blood and standing.

use vg_core::{GameState, PrisonPlan, StatDelta};

use super::content::RARE_ITEMS;
use crate::reply::Reply;

const BASE_CHANCE: f64 = 0.4;
const RARE_ITEM_BONUS: f64 = 0.15;
const REPUTATION_WEIGHT: f64 = 0.03;
const MAX_CHANCE: f64 = 0.85;

const SUCCESS: StatDelta = StatDelta {
    resources: 2,
    attack: 1,
    defense: 1,
    moral: 1,
    reputation: 2,
};

const SETBACK: StatDelta = StatDelta {
    defense: -1,
    resources: -1,
    moral: -1,
    reputation: -1,
    ..StatDelta::NONE
};

/// Damage taken when the general's guards turn on the captain.
const SETBACK_WOUND: u32 = 10;

/// Success chance for a bribe. Negative reputation counts as zero.
pub fn chance(reputation: i32, rare_item: bool) -> f64 {
    let bonus = if rare_item { RARE_ITEM_BONUS } else { 0.0 };
    let standing = f64::from(reputation.max(0)) * REPUTATION_WEIGHT;
    (BASE_CHANCE + bonus + standing).min(MAX_CHANCE)
}

/// Attempt the bribe against a uniform draw `roll`; succeeds when
/// `roll <= chance`. The first rare item carried is handed over either way.
pub fn attempt(state: &mut GameState, roll: f64) -> Reply {
    let mut reply = Reply::new();

    let offered = RARE_ITEMS
        .iter()
        .find_map(|name| state.player.inventory.remove(name).ok());
    if let Some(item) = &offered {
        reply.push(format!("You slide the {} across the table.", item.name));
    }

    let odds = chance(state.player.stats.reputation, offered.is_some());
    let succeeded = roll <= odds;
    tracing::debug!(odds, roll, succeeded, "bribe attempted");

    state
        .story
        .choose_prison_plan(PrisonPlan::Corruption { succeeded });

    if succeeded {
        reply.push(
            "The general pockets the bribe. That night, missiles level the prison walls \
             and Narek walks free.",
        );
        state.player.stats.apply(SUCCESS);
        reply.push(format!("({SUCCESS})"));
    } else {
        reply.push(
            "The general takes the bribe and sends his guards anyway. You fight your way \
             out as the missiles fall. The prison opens, but not cleanly.",
        );
        let taken = state.player.stats.take_damage(SETBACK_WOUND);
        reply.push(format!("You take {taken} damage."));
        state.player.stats.apply(SETBACK);
        reply.push(format!("({SETBACK})"));
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::content;
    use vg_core::{Description, Fact, Map, Room};

    fn rebel(reputation: i32) -> GameState {
        let mut map = Map::new();
        let id = map.add(Room::new("Rebel Base", Description::new("A hangar.")));
        let mut state = GameState::new("Orion Vale", 20, map, id);
        state.player.stats.reputation = reputation;
        state
    }

    #[test]
    fn chance_is_clamped() {
        assert!((chance(10, true) - 0.85).abs() < 1e-9);
        assert!((chance(0, false) - 0.4).abs() < 1e-9);
        assert!((chance(-8, true) - 0.55).abs() < 1e-9);
        assert!((chance(100, false) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn rare_item_is_consumed_on_success() {
        let mut state = rebel(10);
        state.player.inventory.add(content::stabilized_module());
        attempt(&mut state, 0.85);
        assert!(!state.player.inventory.contains("Stabilized Energy Module"));
        assert_eq!(
            state.story.prison_plan(),
            Some(PrisonPlan::Corruption { succeeded: true })
        );
        assert_eq!(state.player.stats.reputation, 12);
    }

    #[test]
    fn rare_item_is_consumed_on_failure() {
        let mut state = rebel(10);
        state.player.inventory.add(content::stabilized_module());
        let hp = state.player.stats.hp;
        attempt(&mut state, 0.9);
        assert!(!state.player.inventory.contains("Stabilized Energy Module"));
        assert_eq!(
            state.story.prison_plan(),
            Some(PrisonPlan::Corruption { succeeded: false })
        );
        assert!(state.player.stats.hp < hp);
        assert!(state.story.holds(Fact::MissilesObtained));
        assert!(state.story.holds(Fact::PrisonLiberated));
    }

    #[test]
    fn without_rare_item_odds_are_lower() {
        let mut state = rebel(0);
        attempt(&mut state, 0.5);
        assert_eq!(
            state.story.prison_plan(),
            Some(PrisonPlan::Corruption { succeeded: false })
        );
    }
}
