//! Item and enemy templates.

use vg_core::{Boss, Enemy, Item, ItemEffect, UniqueItem};

/// Restores 25 HP.
pub fn medical_kit() -> Item {
    Item::new("Medical Kit", "A field kit of sealant foam and stims.")
        .with_effect(ItemEffect::Heal, 25)
        .usable()
        .with_weight(3)
}

/// Powers the ship's drive. Only one exists.
pub fn propulsion_crystal() -> Item {
    Item::new(
        "Propulsion Crystal",
        "A humming shard able to restart a starship's drive.",
    )
    .with_effect(ItemEffect::Quest, 0)
    .with_weight(2)
    .unique(UniqueItem::PropulsionCrystal)
}

/// Lets the captain understand every tongue on Eridani.
pub fn translator_chip() -> Item {
    Item::new(
        "Neural Translator Chip",
        "Grafted behind the ear, it renders alien speech in your language.",
    )
    .with_effect(ItemEffect::Quest, 0)
    .usable()
    .with_weight(1)
    .unique(UniqueItem::Translator)
}

/// +2 defense when used.
pub fn stabilized_module() -> Item {
    Item::new(
        "Stabilized Energy Module",
        "A salvaged power cell that can reinforce armor plating.",
    )
    .with_effect(ItemEffect::DefenseBuff, 2)
    .usable()
    .with_weight(2)
}

/// +1 attack when used.
pub fn combat_stim() -> Item {
    Item::new("Combat Stim", "A rebel-made injector. Sharpens reflexes for good.")
        .with_effect(ItemEffect::AttackBuff, 1)
        .usable()
        .with_weight(1)
}

/// The only dose able to save a dying ally.
pub fn nanomedicine() -> Item {
    Item::new(
        "Nanomedicine Dose",
        "Enough nanites to pull one person back from the brink.",
    )
    .with_effect(ItemEffect::Quest, 0)
    .with_weight(1)
}

/// Name of the nanomedicine item, used by the aftermath on Velyra.
pub const NANOMEDICINE: &str = "Nanomedicine Dose";

/// Items valuable enough to sweeten a bribe, in the order they are offered.
pub const RARE_ITEMS: [&str; 2] = ["Stabilized Energy Module", "Propulsion Crystal"];

/// A patrol trooper on Eridani.
pub fn vorn_patroller() -> Enemy {
    Enemy::new("Vorn Patroller", 40, 7, 2).with_description("A trooper in scorched armor.")
}

/// Boss of the Eridani act. Carries the crystal.
pub fn captain_vorn() -> Enemy {
    Enemy::new("Captain Vorn", 80, 12, 4)
        .with_description("The warlord who holds Eridani's only working spaceport.")
        .as_boss(Boss::Vorn)
        .with_loot(propulsion_crystal())
}

/// Prison guard drone. Carries the nanomedicine.
pub fn sentinel_drone() -> Enemy {
    Enemy::new("Sentinel Drone", 70, 10, 6)
        .with_description("A heavy drone guarding the prison's medical stores.")
        .with_loot(nanomedicine())
}

/// Boss of the Velyra act.
pub fn governor_karn() -> Enemy {
    Enemy::new("Governor Karn", 160, 16, 10)
        .with_description("Velyra's governor, wrapped in an exoskeleton of black steel.")
        .as_boss(Boss::Karn)
}

/// A palace guardian on Aurelion.
pub fn white_guardian() -> Enemy {
    Enemy::new("White Guardian", 90, 22, 8)
        .with_description("A faceless sentinel of hard light guarding the palace.")
}

/// The last boss.
pub fn seren_taal() -> Enemy {
    Enemy::new("Seren Taal", 240, 30, 12)
        .with_description("Archon of Aurelion, who rules by illusion.")
        .as_boss(Boss::Taal)
}

/// The civil-quarter ambush on Velyra: one wave of three drones.
pub fn velyra_ambush() -> Vec<Vec<Enemy>> {
    vec![vec![
        Enemy::new("Scout Drone", 35, 7, 2),
        Enemy::new("Scout Drone", 35, 7, 2),
        Enemy::new("Patrol Drone", 55, 10, 3),
    ]]
}

/// The hologram-quarter ambush on Aurelion. Harder if the captain arrived openly.
pub fn aurelion_ambush(revealed: bool) -> Vec<Vec<Enemy>> {
    let (specter_bonus, guard_bonus) = if revealed { (2, 3) } else { (0, 0) };
    vec![
        vec![
            Enemy::new("Holographic Specter", 45, 12 + specter_bonus, 3),
            Enemy::new("Holographic Specter", 45, 12 + specter_bonus, 3),
        ],
        vec![Enemy::new("Shattered Guard", 60, 16 + guard_bonus, 4)],
    ]
}
