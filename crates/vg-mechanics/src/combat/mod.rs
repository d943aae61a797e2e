//! Combat state machine.
//!
//! `Idle → Engaged(enemy)` on the first strike, back to `Idle` when the enemy
//! falls, and into the terminal `PlayerDefeated` when the player does. Every
//! way of hitting an enemy funnels through [`Combat::strike_at`], and every way
//! of killing one funnels through [`defeat::resolve_defeat`].

mod ambush;
mod defeat;

pub use ambush::{AmbushReport, run_ambush};
pub use defeat::DefeatCause;

use vg_core::GameState;

use crate::error::{MechError, MechResult};
use crate::oracle::Oracle;

/// Where the combat state machine stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No fight in progress.
    #[default]
    Idle,
    /// Fighting the named enemy.
    Engaged {
        /// Enemy being fought.
        enemy: String,
    },
    /// The player died. Terminal.
    PlayerDefeated,
}

/// How a single strike ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// The enemy took the hit and struck back.
    EnemyStands,
    /// The enemy fell.
    EnemyDefeated,
    /// The enemy's counterattack killed the player.
    PlayerDefeated,
}

/// The result of one strike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strike {
    /// Narration, in order.
    pub lines: Vec<String>,
    /// How it ended.
    pub outcome: StrikeOutcome,
    /// Damage dealt to the enemy.
    pub dealt: u32,
    /// Damage taken from the counterattack.
    pub taken: u32,
}

/// The combat resolver.
#[derive(Debug, Clone, Default)]
pub struct Combat {
    phase: Phase,
    round: u32,
}

impl Combat {
    /// A resolver with no fight in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether a fight is in progress.
    pub fn is_engaged(&self) -> bool {
        matches!(self.phase, Phase::Engaged { .. })
    }

    /// Whether the player has died.
    pub fn is_player_defeated(&self) -> bool {
        self.phase == Phase::PlayerDefeated
    }

    /// Strikes exchanged in the current fight.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Attack an enemy in the current room by name.
    ///
    /// Nothing is mutated when the target is missing, absent or already dead.
    pub fn attack(
        &mut self,
        state: &mut GameState,
        oracle: &mut dyn Oracle,
        target: Option<&str>,
    ) -> MechResult<Strike> {
        let index = self.locate(state, target)?;
        self.strike_at(state, oracle, index)
    }

    /// Kill an enemy outright, skipping the damage formula and the oracle.
    pub fn instant_kill(&mut self, state: &mut GameState, target: Option<&str>) -> MechResult<Strike> {
        let index = self.locate(state, target)?;
        let here = state.player.location;
        let enemy = state
            .map
            .room_mut(here)?
            .enemies
            .get_mut(index)
            .ok_or_else(|| MechError::NoSuchEnemy(format!("enemy #{index}")))?;
        let dealt = enemy.hp;
        enemy.kill();

        let mut lines = vec![format!("You overload {}'s systems. It collapses.", enemy.name)];
        lines.extend(defeat::resolve_defeat(state, index, DefeatCause::InstantKill)?);
        self.disengage();
        Ok(Strike {
            lines,
            outcome: StrikeOutcome::EnemyDefeated,
            dealt,
            taken: 0,
        })
    }

    /// One exchange against the enemy at `index` in the current room: the
    /// player's strike, then either the defeat routine or the counterattack.
    pub fn strike_at(
        &mut self,
        state: &mut GameState,
        oracle: &mut dyn Oracle,
        index: usize,
    ) -> MechResult<Strike> {
        if self.is_player_defeated() {
            return Err(MechError::PlayerDefeated);
        }

        let here = state.player.location;
        let (name, defense) = {
            let enemy = state
                .map
                .room(here)?
                .enemies
                .get(index)
                .ok_or_else(|| MechError::NoSuchEnemy(format!("enemy #{index}")))?;
            if !enemy.is_alive() {
                return Err(MechError::AlreadyDefeated(enemy.name.clone()));
            }
            (enemy.name.clone(), enemy.defense)
        };

        if !self.is_engaged() {
            tracing::debug!(enemy = %name, "combat engaged");
            self.phase = Phase::Engaged {
                enemy: name.clone(),
            };
            self.round = 0;
        }
        self.round += 1;

        let outcome = oracle.outcome(&state.player.stats);
        let base = state.player.stats.attack.saturating_sub(defense).max(1);
        let dealt = outcome.multiplier.apply(base);

        let mut lines = outcome.transcript;
        let (enemy_alive, enemy_attack) = {
            let enemy = state
                .map
                .room_mut(here)?
                .enemies
                .get_mut(index)
                .ok_or_else(|| MechError::NoSuchEnemy(name.clone()))?;
            enemy.apply_damage(dealt);
            lines.push(format!(
                "You hit {name} for {dealt} damage ({}). {name}: {}/{} HP.",
                outcome.multiplier, enemy.hp, enemy.max_hp
            ));
            (enemy.is_alive(), enemy.attack)
        };

        if !enemy_alive {
            lines.extend(defeat::resolve_defeat(state, index, DefeatCause::Strike { dealt })?);
            self.disengage();
            return Ok(Strike {
                lines,
                outcome: StrikeOutcome::EnemyDefeated,
                dealt,
                taken: 0,
            });
        }

        let taken = state.player.stats.take_damage(enemy_attack);
        let stats = &state.player.stats;
        lines.push(format!(
            "{name} strikes back for {taken} damage. You: {}/{} HP.",
            stats.hp, stats.max_hp
        ));

        if !stats.is_alive() {
            tracing::info!(enemy = %name, "player defeated");
            lines.push("You collapse. GAME OVER.".to_string());
            state
                .journal
                .append(vg_core::JournalEntry::combat(format!("Fell to {name}.")));
            self.phase = Phase::PlayerDefeated;
            return Ok(Strike {
                lines,
                outcome: StrikeOutcome::PlayerDefeated,
                dealt,
                taken,
            });
        }

        Ok(Strike {
            lines,
            outcome: StrikeOutcome::EnemyStands,
            dealt,
            taken,
        })
    }

    fn disengage(&mut self) {
        if !self.is_player_defeated() {
            self.phase = Phase::Idle;
        }
        self.round = 0;
    }

    fn locate(&self, state: &GameState, target: Option<&str>) -> MechResult<usize> {
        if self.is_player_defeated() {
            return Err(MechError::PlayerDefeated);
        }
        let target = target
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MechError::MissingTarget)?;
        let room = state.current_room()?;
        let index = room
            .enemy_index(target)
            .ok_or_else(|| MechError::NoSuchEnemy(target.to_string()))?;
        if !room.enemies[index].is_alive() {
            return Err(MechError::AlreadyDefeated(room.enemies[index].name.clone()));
        }
        Ok(index)
    }
}
