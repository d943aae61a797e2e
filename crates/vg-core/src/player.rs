//! Player stats, inventory and movement history.

use std::fmt;

use crate::enemy::mitigate;
use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::map::RoomId;

/// The player's stat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Attack power.
    pub attack: u32,
    /// Defense subtracted from incoming hits.
    pub defense: u32,
    /// Moral compass; negative leans ruthless.
    pub moral: i32,
    /// Supplies and favors, never below zero.
    pub resources: u32,
    /// Standing with the rebellion.
    pub reputation: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hp: 100,
            max_hp: 100,
            attack: 15,
            defense: 3,
            moral: 0,
            resources: 0,
            reputation: 0,
        }
    }
}

impl Stats {
    /// Whether the player still stands.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply a raw hit through defense. Returns the damage taken.
    pub fn take_damage(&mut self, raw: u32) -> u32 {
        let dealt = mitigate(raw, self.defense);
        self.hp = self.hp.saturating_sub(dealt);
        dealt
    }

    /// Restore hit points up to the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Apply a set of stat changes, flooring unsigned stats at zero.
    pub fn apply(&mut self, delta: StatDelta) {
        self.attack = self.attack.saturating_add_signed(delta.attack);
        self.defense = self.defense.saturating_add_signed(delta.defense);
        self.resources = self.resources.saturating_add_signed(delta.resources);
        self.moral += delta.moral;
        self.reputation += delta.reputation;
    }
}

/// A bundle of stat changes applied by a narrative branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatDelta {
    /// Attack change.
    pub attack: i32,
    /// Defense change.
    pub defense: i32,
    /// Moral change.
    pub moral: i32,
    /// Resource change.
    pub resources: i32,
    /// Reputation change.
    pub reputation: i32,
}

impl StatDelta {
    /// No change at all.
    pub const NONE: StatDelta = StatDelta {
        attack: 0,
        defense: 0,
        moral: 0,
        resources: 0,
        reputation: 0,
    };

    /// Whether the delta changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for StatDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            ("attack", self.attack),
            ("defense", self.defense),
            ("moral", self.moral),
            ("resources", self.resources),
            ("reputation", self.reputation),
        ]
        .into_iter()
        .filter(|(_, v)| *v != 0)
        .map(|(name, v)| format!("{v:+} {name}"))
        .collect();
        if parts.is_empty() {
            f.write_str("no change")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Carried items with a running weight total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    weight: u32,
    max_weight: u32,
}

impl Inventory {
    /// An empty inventory with a carry limit.
    pub fn new(max_weight: u32) -> Self {
        Self {
            items: Vec::new(),
            weight: 0,
            max_weight,
        }
    }

    /// Carried items in pickup order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current carried weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Carry limit.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Whether an item with that name is carried.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.is_named(name))
    }

    /// Look up a carried item.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_named(name))
    }

    /// Fail if picking the item up would exceed the carry limit.
    pub fn check_capacity(&self, item: &Item) -> CoreResult<()> {
        if self.weight.saturating_add(item.weight) > self.max_weight {
            return Err(CoreError::TooHeavy {
                item: item.name.clone(),
                carried: self.weight,
                max: self.max_weight,
                weight: item.weight,
            });
        }
        Ok(())
    }

    /// Add an item without checking the limit.
    pub fn add(&mut self, item: Item) {
        self.weight = self.weight.saturating_add(item.weight);
        self.items.push(item);
    }

    /// Remove an item by name.
    pub fn remove(&mut self, name: &str) -> CoreResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.is_named(name))
            .ok_or_else(|| CoreError::NotCarried(name.trim().to_string()))?;
        let item = self.items.remove(pos);
        self.weight = self.weight.saturating_sub(item.weight);
        Ok(item)
    }

    /// Human-readable listing.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return format!("Inventory empty ({}/{}).", self.weight, self.max_weight);
        }
        let mut out = format!("Inventory ({}/{}):", self.weight, self.max_weight);
        for item in &self.items {
            out.push_str(&format!("\n- {item}"));
        }
        out
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Captain's name.
    pub name: String,
    /// Stat block.
    pub stats: Stats,
    /// Carried items.
    pub inventory: Inventory,
    /// Current room.
    pub location: RoomId,
    history: Vec<RoomId>,
}

impl Player {
    /// A player with default stats standing in `location`.
    pub fn new(name: impl Into<String>, max_weight: u32, location: RoomId) -> Self {
        Self {
            name: name.into(),
            stats: Stats::default(),
            inventory: Inventory::new(max_weight),
            location,
            history: Vec::new(),
        }
    }

    /// Move to a room, remembering where we came from.
    pub fn move_to(&mut self, room: RoomId) {
        self.history.push(self.location);
        self.location = room;
    }

    /// Return to the previous room. `None` if there is nowhere to go back to.
    pub fn back(&mut self) -> Option<RoomId> {
        let previous = self.history.pop()?;
        self.location = previous;
        Some(previous)
    }

    /// Jump to a room of a freshly built map, forgetting the old one.
    pub fn relocate(&mut self, room: RoomId) {
        self.history.clear();
        self.location = room;
    }

    /// Rooms visited before the current one, oldest first.
    pub fn history(&self) -> &[RoomId] {
        &self.history
    }

    /// One-line status.
    pub fn status_line(&self) -> String {
        let s = &self.stats;
        format!(
            "{} | HP {}/{} | ATK {} | DEF {} | Moral {} | Resources {} | Reputation {}",
            self.name, s.hp, s.max_hp, s.attack, s.defense, s.moral, s.resources, s.reputation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemEffect;

    #[test]
    fn default_stats() {
        let s = Stats::default();
        assert_eq!((s.hp, s.max_hp, s.attack, s.defense), (100, 100, 15, 3));
        assert_eq!((s.moral, s.resources, s.reputation), (0, 0, 0));
    }

    #[test]
    fn damage_goes_through_defense() {
        let mut s = Stats::default();
        assert_eq!(s.take_damage(12), 9);
        assert_eq!(s.hp, 91);
        assert_eq!(s.take_damage(0), 0);
        assert_eq!(s.take_damage(2), 1);
        assert_eq!(s.hp, 90);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut s = Stats::default();
        s.hp = 90;
        assert_eq!(s.heal(25), 10);
        assert_eq!(s.hp, 100);
    }

    #[test]
    fn delta_floors_unsigned_stats() {
        let mut s = Stats::default();
        s.apply(StatDelta {
            resources: -2,
            defense: -10,
            moral: -3,
            ..StatDelta::NONE
        });
        assert_eq!(s.resources, 0);
        assert_eq!(s.defense, 0);
        assert_eq!(s.moral, -3);
    }

    #[test]
    fn delta_display() {
        let d = StatDelta {
            moral: 2,
            attack: 1,
            ..StatDelta::NONE
        };
        assert_eq!(d.to_string(), "+1 attack, +2 moral");
        assert_eq!(StatDelta::NONE.to_string(), "no change");
    }

    #[test]
    fn inventory_weight_round_trip() {
        let mut inv = Inventory::new(20);
        let kit = Item::new("Medical Kit", "")
            .with_effect(ItemEffect::Heal, 25)
            .with_weight(3);
        inv.check_capacity(&kit).unwrap();
        inv.add(kit.clone());
        assert_eq!(inv.weight(), 3);
        assert!(inv.contains("medical kit"));

        let dropped = inv.remove("MEDICAL KIT").unwrap();
        assert_eq!(dropped, kit);
        assert_eq!(inv.weight(), 0);
        assert!(inv.items().is_empty());
    }

    #[test]
    fn capacity_is_enforced() {
        let inv = Inventory::new(2);
        let anvil = Item::new("Anvil", "").with_weight(3);
        assert!(matches!(
            inv.check_capacity(&anvil),
            Err(CoreError::TooHeavy { weight: 3, .. })
        ));
    }

    #[test]
    fn remove_missing_item() {
        let mut inv = Inventory::new(20);
        assert_eq!(
            inv.remove("ghost"),
            Err(CoreError::NotCarried("ghost".into()))
        );
    }

    #[test]
    fn history_stack() {
        let mut p = Player::new("Orion Vale", 20, RoomId(0));
        assert_eq!(p.back(), None);
        p.move_to(RoomId(1));
        p.move_to(RoomId(2));
        assert_eq!(p.back(), Some(RoomId(1)));
        assert_eq!(p.location, RoomId(1));
        assert_eq!(p.back(), Some(RoomId(0)));
        assert_eq!(p.back(), None);
    }

    #[test]
    fn relocate_forgets_history() {
        let mut p = Player::new("Orion Vale", 20, RoomId(0));
        p.move_to(RoomId(3));
        p.relocate(RoomId(0));
        assert!(p.history().is_empty());
        assert_eq!(p.location, RoomId(0));
    }
}
