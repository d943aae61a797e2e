//! Item templates and their effects.

use std::fmt;

use crate::story::UniqueItem;

/// What happens when an item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restores hit points, capped at the maximum.
    Heal,
    /// Permanently raises defense.
    DefenseBuff,
    /// Permanently raises attack.
    AttackBuff,
    /// Plot item: carried for the story, never consumed by use.
    Quest,
    /// No effect at all.
    Inert,
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Heal => "heal",
            Self::DefenseBuff => "defense",
            Self::AttackBuff => "attack",
            Self::Quest => "quest",
            Self::Inert => "inert",
        };
        f.write_str(label)
    }
}

/// An item template. Items are moved between rooms and the inventory by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Text shown by `check`.
    pub description: String,
    /// Effect applied on use.
    pub effect: ItemEffect,
    /// Strength of the effect.
    pub magnitude: u32,
    /// Whether `use` is allowed at all.
    pub usable: bool,
    /// Carry weight.
    pub weight: u32,
    /// Set for story items that may only be obtained once.
    pub unique: Option<UniqueItem>,
}

impl Item {
    /// Create an inert, unusable item of weight 1.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect: ItemEffect::Inert,
            magnitude: 0,
            usable: false,
            weight: 1,
            unique: None,
        }
    }

    /// Set the effect and its magnitude.
    pub fn with_effect(mut self, effect: ItemEffect, magnitude: u32) -> Self {
        self.effect = effect;
        self.magnitude = magnitude;
        self
    }

    /// Mark the item as usable.
    pub fn usable(mut self) -> Self {
        self.usable = true;
        self
    }

    /// Set the carry weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Tag the item as a one-of-a-kind story item.
    pub fn unique(mut self, tag: UniqueItem) -> Self {
        self.unique = Some(tag);
        self
    }

    /// Whether using the item removes it from the inventory.
    ///
    /// Quest items are never consumable.
    pub fn is_consumable(&self) -> bool {
        self.usable
            && matches!(
                self.effect,
                ItemEffect::Heal | ItemEffect::DefenseBuff | ItemEffect::AttackBuff
            )
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, weight {})", self.name, self.effect, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let item = Item::new("Rock", "Just a rock.");
        assert_eq!(item.effect, ItemEffect::Inert);
        assert_eq!(item.weight, 1);
        assert!(!item.usable);
    }

    #[test]
    fn quest_items_are_never_consumable() {
        let chip = Item::new("Chip", "")
            .with_effect(ItemEffect::Quest, 0)
            .usable();
        assert!(!chip.is_consumable());

        let kit = Item::new("Kit", "")
            .with_effect(ItemEffect::Heal, 25)
            .usable();
        assert!(kit.is_consumable());
    }

    #[test]
    fn names_match_case_insensitively() {
        let item = Item::new("Medical Kit", "");
        assert!(item.is_named("medical kit"));
        assert!(item.is_named("  MEDICAL KIT "));
        assert!(!item.is_named("kit"));
    }
}
