//! The single defeat routine shared by every kill path.

use std::fmt;

use vg_core::{Boss, GameState, JournalEntry, MerchantDeal, StatDelta};

use crate::error::{MechError, MechResult};

/// How the enemy was brought down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatCause {
    /// A regular strike dealing this much damage.
    Strike {
        /// Damage of the final blow.
        dealt: u32,
    },
    /// The instant-kill shortcut.
    InstantKill,
}

impl fmt::Display for DefeatCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strike { dealt } => write!(f, "final blow of {dealt}"),
            Self::InstantKill => f.write_str("instant kill"),
        }
    }
}

/// Bonus granted on Vorn's death if a crew member was traded to the merchant.
const SACRIFICE_BONUS: StatDelta = StatDelta {
    moral: 3,
    attack: 1,
    ..StatDelta::NONE
};

/// Reputation gained for toppling Karn.
const KARN_BONUS: StatDelta = StatDelta {
    reputation: 3,
    ..StatDelta::NONE
};

/// Drop loot into the room, fire the boss hook and journal the kill.
///
/// The enemy at `index` must already be at zero hit points.
pub(super) fn resolve_defeat(
    state: &mut GameState,
    index: usize,
    cause: DefeatCause,
) -> MechResult<Vec<String>> {
    let here = state.player.location;
    let (name, boss, loot) = {
        let enemy = state
            .map
            .room_mut(here)?
            .enemies
            .get_mut(index)
            .ok_or_else(|| MechError::NoSuchEnemy(format!("enemy #{index}")))?;
        (enemy.name.clone(), enemy.boss, std::mem::take(&mut enemy.loot))
    };

    let mut lines = vec![format!("{name} is defeated!")];

    let mut dropped = Vec::new();
    for item in loot {
        let duplicate = item
            .unique
            .is_some_and(|tag| !state.story.obtain_unique(tag));
        if duplicate {
            lines.push(format!("You already hold the {}.", item.name));
            continue;
        }
        dropped.push(item.name.clone());
        state.map.room_mut(here)?.items.push(item);
    }
    if !dropped.is_empty() {
        lines.push(format!("{name} dropped: {}", dropped.join(", ")));
    }

    if let Some(boss) = boss {
        lines.extend(boss_hook(state, boss));
    }

    tracing::info!(enemy = %name, %cause, "enemy defeated");
    let entry = match cause {
        DefeatCause::Strike { .. } => format!("{name} defeated."),
        DefeatCause::InstantKill => format!("{name} defeated (instant kill)."),
    };
    state.journal.append(JournalEntry::combat(entry));
    Ok(lines)
}

/// One-time story consequences of a boss death.
fn boss_hook(state: &mut GameState, boss: Boss) -> Vec<String> {
    if !state.story.record_defeat(boss) {
        return Vec::new();
    }
    tracing::info!(?boss, "boss hook fired");

    let mut lines = Vec::new();
    match boss {
        Boss::Vorn => {
            lines.push("Vorn's blockade is broken. The ship can be repaired.".to_string());
            if state.story.merchant() == Some(MerchantDeal::Sacrificed) {
                state.player.stats.apply(SACRIFICE_BONUS);
                lines.push(format!(
                    "The crew member you traded was not given up for nothing ({SACRIFICE_BONUS})."
                ));
            }
        }
        Boss::Karn => {
            state.player.stats.apply(KARN_BONUS);
            lines.push(format!(
                "Karn's citadel falls silent. Velyra IX will remember your name ({KARN_BONUS})."
            ));
        }
        Boss::Taal => {
            lines.push("The light of Seren Taal gutters out.".to_string());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::{Description, Enemy, Map, Room};

    fn state_with(enemy: Enemy) -> GameState {
        let mut map = Map::new();
        let id = map.add(Room::new("Hall", Description::new("")).with_enemy(enemy));
        GameState::new("Orion Vale", 20, map, id)
    }

    #[test]
    fn boss_hook_fires_once() {
        let mut state = state_with(Enemy::new("Governor Karn", 0, 16, 10).as_boss(Boss::Karn));
        resolve_defeat(&mut state, 0, DefeatCause::InstantKill).unwrap();
        resolve_defeat(&mut state, 0, DefeatCause::InstantKill).unwrap();
        assert_eq!(state.player.stats.reputation, 3);
    }

    #[test]
    fn loot_is_taken_once() {
        let drone = Enemy::new("Sentinel Drone", 0, 10, 6)
            .with_loot(vg_core::Item::new("Nanomedicine Dose", "A single dose."));
        let mut state = state_with(drone);
        let lines = resolve_defeat(&mut state, 0, DefeatCause::Strike { dealt: 9 }).unwrap();
        assert!(lines.iter().any(|l| l == "Sentinel Drone dropped: Nanomedicine Dose"));
        resolve_defeat(&mut state, 0, DefeatCause::Strike { dealt: 9 }).unwrap();
        assert_eq!(state.current_room().unwrap().items.len(), 1);
        assert_eq!(state.journal.len(), 2);
    }

    #[test]
    fn no_sacrifice_no_bonus() {
        let mut state = state_with(Enemy::new("Captain Vorn", 0, 12, 4).as_boss(Boss::Vorn));
        state.story.settle_merchant(MerchantDeal::Refused);
        resolve_defeat(&mut state, 0, DefeatCause::InstantKill).unwrap();
        assert_eq!(state.player.stats.moral, 0);
        assert_eq!(state.player.stats.attack, 15);
    }
}
