//! The aggregate game state.

use crate::error::CoreResult;
use crate::journal::{Journal, JournalEntry};
use crate::map::{Map, RoomId};
use crate::player::Player;
use crate::room::Room;
use crate::story::Story;

/// Everything that changes during a run: the player, the story vector, the
/// current act's room graph and the journal.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The player character.
    pub player: Player,
    /// Narrative progress.
    pub story: Story,
    /// Room graph of the current act.
    pub map: Map,
    /// Event log.
    pub journal: Journal,
}

impl GameState {
    /// Start a run on `map` with the player standing in `entry`.
    pub fn new(name: impl Into<String>, max_weight: u32, map: Map, entry: RoomId) -> Self {
        Self {
            player: Player::new(name, max_weight, entry),
            story: Story::new(),
            map,
            journal: Journal::new(),
        }
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> CoreResult<&Room> {
        self.map.room(self.player.location)
    }

    /// The room the player stands in, mutably.
    pub fn current_room_mut(&mut self) -> CoreResult<&mut Room> {
        self.map.room_mut(self.player.location)
    }

    /// Full description of the current room.
    pub fn describe_here(&self) -> CoreResult<String> {
        self.map.describe(self.player.location, &self.story)
    }

    /// Walk to `to`, pushing the current room on the history stack.
    pub fn walk_to(&mut self, to: RoomId) -> CoreResult<()> {
        let from = self.current_room()?.name.clone();
        let dest = self.map.room(to)?.name.clone();
        self.player.move_to(to);
        self.journal.append(JournalEntry::travel(from, dest));
        Ok(())
    }

    /// Replace the room graph with a new act's and drop the player at its entry.
    pub fn install_act(&mut self, map: Map, entry: RoomId) -> CoreResult<()> {
        map.room(entry)?;
        self.map = map;
        self.player.relocate(entry);
        Ok(())
    }

    /// Record a story beat.
    pub fn note(&mut self, text: impl Into<String>) {
        self.journal.append(JournalEntry::narrative(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Description, Direction};

    fn line() -> (Map, RoomId, RoomId) {
        let mut map = Map::new();
        let a = map.add(Room::new("A", Description::new("First.")));
        let b = map.add(Room::new("B", Description::new("Second.")));
        map.connect(a, Direction::East, b).unwrap();
        (map, a, b)
    }

    #[test]
    fn walking_logs_travel() {
        let (map, a, b) = line();
        let mut state = GameState::new("Orion Vale", 20, map, a);
        state.walk_to(b).unwrap();
        assert_eq!(state.player.location, b);
        assert_eq!(state.player.history(), &[a]);
        assert_eq!(
            state.journal.entries()[0].summary(),
            "Travelled from A to B"
        );
    }

    #[test]
    fn install_act_relocates_and_forgets() {
        let (map, a, b) = line();
        let mut state = GameState::new("Orion Vale", 20, map, a);
        state.walk_to(b).unwrap();

        let mut next = Map::new();
        let base = next.add(Room::new("Base", Description::new("Rebels.")));
        state.install_act(next, base).unwrap();
        assert_eq!(state.player.location, base);
        assert!(state.player.history().is_empty());
        assert_eq!(state.current_room().unwrap().name, "Base");
    }

    #[test]
    fn install_act_rejects_bad_entry() {
        let (map, a, _) = line();
        let mut state = GameState::new("Orion Vale", 20, map, a);
        assert!(state.install_act(Map::new(), RoomId(0)).is_err());
        assert_eq!(state.current_room().unwrap().name, "A");
    }
}
