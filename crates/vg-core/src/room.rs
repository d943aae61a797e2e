//! Rooms, exits and conditional descriptions.

use std::collections::BTreeMap;

use crate::character::Character;
use crate::condition::Condition;
use crate::enemy::Enemy;
use crate::item::Item;
use crate::map::RoomId;
use crate::story::Story;

/// Direction of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Parse a direction, accepting English and French words and initials.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "nord" => Some(Self::North),
            "e" | "east" | "est" => Some(Self::East),
            "s" | "south" | "sud" => Some(Self::South),
            "w" | "o" | "west" | "ouest" => Some(Self::West),
            "u" | "h" | "up" | "haut" => Some(Self::Up),
            "d" | "b" | "down" | "bas" => Some(Self::Down),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The direction leading back.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// A default text plus conditional overrides; the first override whose
/// condition holds wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    /// Text used when no override applies.
    pub default: String,
    /// Overrides in priority order.
    pub overrides: Vec<(Condition, String)>,
}

impl Description {
    /// A description without overrides.
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            overrides: Vec::new(),
        }
    }

    /// Append an override with the lowest priority so far.
    pub fn when(mut self, condition: impl Into<Condition>, text: impl Into<String>) -> Self {
        self.overrides.push((condition.into(), text.into()));
        self
    }

    /// The text for the current story.
    pub fn resolve(&self, story: &Story) -> &str {
        self.overrides
            .iter()
            .find(|(condition, _)| condition.evaluate(story))
            .map(|(_, text)| text.as_str())
            .unwrap_or(self.default.as_str())
    }
}

/// A node of the room graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub description: Description,
    /// Exits by direction.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items lying on the ground.
    pub items: Vec<Item>,
    /// NPCs present.
    pub characters: Vec<Character>,
    /// Enemies present, dead ones included.
    pub enemies: Vec<Enemy>,
}

impl Room {
    /// An empty room.
    pub fn new(name: impl Into<String>, description: Description) -> Self {
        Self {
            name: name.into(),
            description,
            exits: BTreeMap::new(),
            items: Vec::new(),
            characters: Vec::new(),
            enemies: Vec::new(),
        }
    }

    /// Place an item on the ground.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Place an NPC.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Place an enemy.
    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    /// Remove an item from the ground by name.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.is_named(name))?;
        Some(self.items.remove(pos))
    }

    /// Find an NPC by name.
    pub fn character_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.is_named(name))
    }

    /// Index of the enemy with that name, preferring living ones.
    pub fn enemy_index(&self, name: &str) -> Option<usize> {
        self.enemies
            .iter()
            .position(|e| e.is_alive() && e.is_named(name))
            .or_else(|| self.enemies.iter().position(|e| e.is_named(name)))
    }

    /// Enemies still standing.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    /// Every name a player could refer to here.
    pub fn nameables(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|i| i.name.as_str())
            .chain(self.characters.iter().map(|c| c.name.as_str()))
            .chain(self.enemies.iter().map(|e| e.name.as_str()))
            .collect()
    }
}
