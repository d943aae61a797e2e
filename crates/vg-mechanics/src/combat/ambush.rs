//! Scripted multi-wave ambushes.

use vg_core::{Enemy, GameState};

use super::{Combat, StrikeOutcome};
use crate::error::MechResult;
use crate::oracle::Oracle;

/// What happened during an ambush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbushReport {
    /// Narration, in order.
    pub lines: Vec<String>,
    /// False if the player died partway.
    pub survived: bool,
    /// Enemies brought down.
    pub defeated: usize,
}

/// Fight each wave's enemies one at a time until every enemy is down or
/// the player is.
///
/// Each enemy is pushed into the current room and struck repeatedly through
/// [`Combat::strike_at`] while both sides stand. Defeated ambushers are removed
/// from the room again. The sequence stops at the first player defeat.
pub fn run_ambush(
    combat: &mut Combat,
    state: &mut GameState,
    oracle: &mut dyn Oracle,
    waves: Vec<Vec<Enemy>>,
) -> MechResult<AmbushReport> {
    let mut report = AmbushReport {
        lines: Vec::new(),
        survived: true,
        defeated: 0,
    };
    let wave_count = waves.len();

    for (n, wave) in waves.into_iter().enumerate() {
        if wave_count > 1 {
            report.lines.push(format!("-- Wave {} of {wave_count} --", n + 1));
        }
        for enemy in wave {
            let name = enemy.name.clone();
            let index = {
                let room = state.current_room_mut()?;
                room.enemies.push(enemy);
                room.enemies.len() - 1
            };
            report.lines.push(format!("{name} closes in!"));
            tracing::debug!(enemy = %name, wave = n + 1, "ambusher engaged");

            loop {
                let strike = match combat.strike_at(state, oracle, index) {
                    Ok(strike) => strike,
                    Err(e) => {
                        withdraw(combat, state, index);
                        return Err(e);
                    }
                };
                report.lines.extend(strike.lines);
                match strike.outcome {
                    StrikeOutcome::EnemyStands => {}
                    StrikeOutcome::EnemyDefeated => break,
                    StrikeOutcome::PlayerDefeated => {
                        report.survived = false;
                        return Ok(report);
                    }
                }
            }

            state.current_room_mut()?.enemies.remove(index);
            report.defeated += 1;
        }
    }

    Ok(report)
}

/// Take an ambusher back out of the room after a failed exchange.
fn withdraw(combat: &mut Combat, state: &mut GameState, index: usize) {
    if let Ok(room) = state.current_room_mut() {
        if index < room.enemies.len() {
            room.enemies.remove(index);
        }
    }
    combat.disengage();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{FixedOracle, Multiplier};
    use vg_core::{Description, Map, Room};

    fn street() -> GameState {
        let mut map = Map::new();
        let id = map.add(Room::new("Civil Quarter", Description::new("Empty streets.")));
        GameState::new("Orion Vale", 20, map, id)
    }

    #[test]
    fn waves_are_fought_and_cleaned_up() {
        let mut state = street();
        let mut combat = Combat::new();
        let mut oracle = FixedOracle::new(Multiplier::Strong);
        let waves = vec![
            vec![
                Enemy::new("Scout Drone", 35, 7, 2),
                Enemy::new("Scout Drone", 35, 7, 2),
            ],
            vec![Enemy::new("Patrol Drone", 55, 10, 3)],
        ];

        let report = run_ambush(&mut combat, &mut state, &mut oracle, waves).unwrap();
        assert!(report.survived);
        assert_eq!(report.defeated, 3);
        assert!(state.current_room().unwrap().enemies.is_empty());
        assert_eq!(combat.phase(), &super::super::Phase::Idle);
        // scouts: 20 per hit, two hits each, one counter each (4 dmg)
        // patrol: 18 per hit, four hits, three counters (7 dmg)
        assert_eq!(state.player.stats.hp, 100 - 4 - 4 - 21);
        assert!(report.lines.iter().any(|l| l == "-- Wave 2 of 2 --"));
    }

    #[test]
    fn ambush_aborts_on_player_defeat() {
        let mut state = street();
        state.player.stats.hp = 5;
        let mut combat = Combat::new();
        let mut oracle = FixedOracle::new(Multiplier::Weak);
        let waves = vec![vec![
            Enemy::new("Shattered Guard", 60, 19, 4),
            Enemy::new("Shattered Guard", 60, 19, 4),
        ]];

        let report = run_ambush(&mut combat, &mut state, &mut oracle, waves).unwrap();
        assert!(!report.survived);
        assert_eq!(report.defeated, 0);
        assert!(combat.is_player_defeated());
        // the second guard never entered
        assert_eq!(state.current_room().unwrap().enemies.len(), 1);
    }

    #[test]
    fn failed_exchange_withdraws_the_ambusher() {
        let mut state = street();
        let mut combat = Combat::new();
        let mut oracle = FixedOracle::new(Multiplier::Strong);
        let mut wreck = Enemy::new("Burnt-out Drone", 10, 5, 0);
        wreck.hp = 0;

        let result = run_ambush(&mut combat, &mut state, &mut oracle, vec![vec![wreck]]);
        assert_eq!(
            result,
            Err(crate::error::MechError::AlreadyDefeated("Burnt-out Drone".into()))
        );
        assert!(state.current_room().unwrap().enemies.is_empty());
        assert_eq!(combat.phase(), &super::super::Phase::Idle);
    }
}
