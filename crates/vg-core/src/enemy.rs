//! Combat participants.

use crate::item::Item;

/// The act-ending bosses. Each carries its own one-time defeat hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boss {
    /// Captain Vorn, who ends the Eridani act.
    Vorn,
    /// Governor Karn, who ends the Velyra act.
    Karn,
    /// Seren Taal, the last fight of the game.
    Taal,
}

/// Damage left after defense: zero for a zero raw amount, otherwise at least 1.
pub fn mitigate(raw: u32, defense: u32) -> u32 {
    if raw == 0 {
        0
    } else {
        raw.saturating_sub(defense).max(1)
    }
}

/// An enemy standing in a room. Defeated enemies stay in the room as inert records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Text shown by `analyze`.
    pub description: String,
    /// Current hit points. Never negative by construction.
    pub hp: u32,
    /// Hit points at spawn.
    pub max_hp: u32,
    /// Attack power used for retaliation.
    pub attack: u32,
    /// Defense subtracted from incoming damage.
    pub defense: u32,
    /// Set for act bosses.
    pub boss: Option<Boss>,
    /// Items dropped into the room on defeat.
    pub loot: Vec<Item>,
}

impl Enemy {
    /// Create an enemy at full health.
    pub fn new(name: impl Into<String>, hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            hp,
            max_hp: hp,
            attack,
            defense,
            boss: None,
            loot: Vec::new(),
        }
    }

    /// Set the analyze text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the enemy as an act boss.
    pub fn as_boss(mut self, boss: Boss) -> Self {
        self.boss = Some(boss);
        self
    }

    /// Add an item to the loot list.
    pub fn with_loot(mut self, item: Item) -> Self {
        self.loot.push(item);
        self
    }

    /// Whether the enemy still has hit points.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Whether the enemy is an act boss.
    pub fn is_boss(&self) -> bool {
        self.boss.is_some()
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Apply a raw amount through this enemy's defense. Returns the damage dealt.
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let dealt = mitigate(raw, self.defense);
        self.apply_damage(dealt)
    }

    /// Subtract an already-mitigated amount. Returns the amount applied.
    pub fn apply_damage(&mut self, dealt: u32) -> u32 {
        self.hp = self.hp.saturating_sub(dealt);
        dealt
    }

    /// Drop hit points to zero.
    pub fn kill(&mut self) {
        self.hp = 0;
    }

    /// One-line status, e.g. `Captain Vorn [80/80]`.
    pub fn summary(&self) -> String {
        format!("{} [{}/{}]", self.name, self.hp, self.max_hp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_raw_deals_nothing() {
        let mut e = Enemy::new("Drone", 10, 1, 5);
        assert_eq!(e.take_damage(0), 0);
        assert_eq!(e.hp, 10);
    }

    #[test]
    fn defense_floor_is_one() {
        let mut e = Enemy::new("Drone", 10, 1, 50);
        assert_eq!(e.take_damage(3), 1);
        assert_eq!(e.hp, 9);
    }

    #[test]
    fn hp_saturates_at_zero() {
        let mut e = Enemy::new("Drone", 5, 1, 0);
        assert_eq!(e.apply_damage(40), 40);
        assert_eq!(e.hp, 0);
        assert!(!e.is_alive());
    }

    #[test]
    fn kill_and_boss_flag() {
        let mut vorn = Enemy::new("Captain Vorn", 80, 12, 4).as_boss(Boss::Vorn);
        assert!(vorn.is_boss());
        vorn.kill();
        assert!(!vorn.is_alive());
        assert_eq!(vorn.summary(), "Captain Vorn [0/80]");
    }

    proptest! {
        #[test]
        fn mitigation_matches_formula(raw in 1u32..10_000, defense in 0u32..10_000) {
            let expected = if raw > defense { raw - defense } else { 1 };
            prop_assert_eq!(mitigate(raw, defense), expected);
        }

        #[test]
        fn hp_never_underflows(hp in 0u32..500, raw in 0u32..1_000, defense in 0u32..50) {
            let mut e = Enemy::new("Target", hp, 0, defense);
            let dealt = e.take_damage(raw);
            prop_assert_eq!(e.hp, hp.saturating_sub(dealt));
            prop_assert_eq!(e.is_alive(), e.hp > 0);
        }
    }
}
