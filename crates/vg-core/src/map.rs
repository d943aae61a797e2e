//! The room graph of one act.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::room::{Direction, Room};
use crate::story::Story;

/// Index of a room within its map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A room graph with symmetric exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    rooms: Vec<Room>,
}

impl Map {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its id.
    pub fn add(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Link two rooms both ways: `from` reaches `to` via `dir`, and `to`
    /// reaches `from` via the opposite direction.
    pub fn connect(&mut self, from: RoomId, dir: Direction, to: RoomId) -> CoreResult<()> {
        self.room_mut(from)?.exits.insert(dir, to);
        self.room_mut(to)?.exits.insert(dir.opposite(), from);
        Ok(())
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> CoreResult<&Room> {
        self.rooms.get(id.0).ok_or(CoreError::UnknownRoom(id.0))
    }

    /// Look up a room mutably.
    pub fn room_mut(&mut self, id: RoomId) -> CoreResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(CoreError::UnknownRoom(id.0))
    }

    /// Find a room by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|r| r.name.eq_ignore_ascii_case(name))
            .map(RoomId)
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the map has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Full location text: narrative, people, living enemies, ground items and exits.
    pub fn describe(&self, id: RoomId, story: &Story) -> CoreResult<String> {
        let room = self.room(id)?;
        let mut out = format!("== {} ==\n{}", room.name, room.description.resolve(story));

        if !room.characters.is_empty() {
            let names: Vec<&str> = room.characters.iter().map(|c| c.name.as_str()).collect();
            out.push_str(&format!("\nPeople here: {}", names.join(", ")));
        }

        let living: Vec<String> = room.living_enemies().map(|e| e.summary()).collect();
        if !living.is_empty() {
            out.push_str(&format!("\nEnemies: {}", living.join(", ")));
        }

        if !room.items.is_empty() {
            let names: Vec<&str> = room.items.iter().map(|i| i.name.as_str()).collect();
            out.push_str(&format!("\nOn the ground: {}", names.join(", ")));
        }

        if room.exits.is_empty() {
            out.push_str("\nNo exits.");
        } else {
            out.push_str("\nExits:");
            for (dir, target) in &room.exits {
                let name = self.room(*target).map(|r| r.name.as_str()).unwrap_or("?");
                out.push_str(&format!("\n  {} → {name}", dir.name()));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;
    use crate::room::Description;

    fn two_rooms() -> (Map, RoomId, RoomId) {
        let mut map = Map::new();
        let a = map.add(Room::new("Landing", Description::new("Scorched rock.")));
        let b = map.add(Room::new("Outpost", Description::new("A mining camp.")));
        map.connect(a, Direction::East, b).unwrap();
        (map, a, b)
    }

    #[test]
    fn connect_is_symmetric() {
        let (map, a, b) = two_rooms();
        assert_eq!(map.room(a).unwrap().exits.get(&Direction::East), Some(&b));
        assert_eq!(map.room(b).unwrap().exits.get(&Direction::West), Some(&a));
    }

    #[test]
    fn unknown_room_is_an_error() {
        let (map, _, _) = two_rooms();
        assert_eq!(map.room(RoomId(9)).unwrap_err(), CoreError::UnknownRoom(9));
    }

    #[test]
    fn find_by_name() {
        let (map, _, b) = two_rooms();
        assert_eq!(map.find("outpost"), Some(b));
        assert_eq!(map.find("Nowhere"), None);
    }

    #[test]
    fn describe_hides_dead_enemies() {
        let (mut map, a, _) = two_rooms();
        let mut dead = Enemy::new("Husk", 5, 1, 0);
        dead.kill();
        let room = map.room_mut(a).unwrap();
        room.enemies.push(dead);
        room.enemies.push(Enemy::new("Patroller", 40, 7, 2));

        let text = map.describe(a, &Story::new()).unwrap();
        assert!(text.starts_with("== Landing ==\nScorched rock."));
        assert!(text.contains("Enemies: Patroller [40/40]"));
        assert!(!text.contains("Husk"));
        assert!(text.contains("east → Outpost"));
    }
}
