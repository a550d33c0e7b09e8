//! The Room Directory: the authoritative in-memory roster per session code.
//! Pure data and mutation logic, no I/O — the relay owns an instance and is
//! the only writer.

use std::collections::HashMap;

use common::ws::PlayerInfo;
use common::SessionCode;

/// Outcome of [`RoomStore::add_player`], so callers can avoid re-broadcasting
/// a join the roster already knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// One room's roster. `players` keeps join order. `host_id` belongs to the
/// directory API; the relay carries it but never assigns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    pub players: Vec<PlayerInfo>,
    pub host_id: Option<String>,
}

/// Store interface for rooms. Injectable so the relay can be unit-tested in
/// isolation and the backing store swapped out later. Every operation is
/// scoped to exactly one code.
pub trait RoomStore {
    /// Return the room for `code`, creating an empty one if unseen. Idempotent.
    fn ensure_room(&mut self, code: &SessionCode) -> &mut Room;

    fn add_player(&mut self, code: &SessionCode, player: PlayerInfo) -> AddOutcome;

    /// Remove the matching player. Returns whether anything was removed;
    /// unknown rooms and unknown players are no-ops.
    fn remove_player(&mut self, code: &SessionCode, player_id: &str) -> bool;

    fn room(&self, code: &SessionCode) -> Option<&Room>;
}

#[derive(Debug, Default)]
pub struct InMemoryRooms {
    rooms: HashMap<SessionCode, Room>,
}

impl InMemoryRooms {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomStore for InMemoryRooms {
    fn ensure_room(&mut self, code: &SessionCode) -> &mut Room {
        self.rooms.entry(code.clone()).or_default()
    }

    fn add_player(&mut self, code: &SessionCode, player: PlayerInfo) -> AddOutcome {
        let room = self.ensure_room(code);
        if room.players.iter().any(|p| p.id == player.id) {
            AddOutcome::AlreadyPresent
        } else {
            room.players.push(player);
            AddOutcome::Added
        }
    }

    fn remove_player(&mut self, code: &SessionCode, player_id: &str) -> bool {
        match self.rooms.get_mut(code) {
            Some(room) => {
                let before = room.players.len();
                room.players.retain(|p| p.id != player_id);
                room.players.len() != before
            }
            None => false,
        }
    }

    fn room(&self, code: &SessionCode) -> Option<&Room> {
        self.rooms.get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str) -> PlayerInfo {
        PlayerInfo {
            id: id.into(),
            name: format!("Player {id}"),
        }
    }

    #[test]
    fn ensure_room_is_idempotent() {
        let mut rooms = InMemoryRooms::new();
        let code = SessionCode::new("AB12CD");
        rooms.ensure_room(&code).players.push(player("p1"));
        assert_eq!(rooms.ensure_room(&code).players.len(), 1);
    }

    #[test]
    fn add_player_is_idempotent_per_id() {
        let mut rooms = InMemoryRooms::new();
        let code = SessionCode::new("AB12CD");
        assert_eq!(rooms.add_player(&code, player("p1")), AddOutcome::Added);
        assert_eq!(
            rooms.add_player(&code, player("p1")),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(rooms.room(&code).unwrap().players.len(), 1);
    }

    #[test]
    fn roster_keeps_join_order() {
        let mut rooms = InMemoryRooms::new();
        let code = SessionCode::new("AB12CD");
        rooms.add_player(&code, player("p2"));
        rooms.add_player(&code, player("p1"));
        rooms.add_player(&code, player("p3"));
        let ids: Vec<_> = rooms
            .room(&code)
            .unwrap()
            .players
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["p2", "p1", "p3"]);
    }

    #[test]
    fn remove_player_tolerates_unknown_room_and_player() {
        let mut rooms = InMemoryRooms::new();
        let code = SessionCode::new("AB12CD");
        assert!(!rooms.remove_player(&code, "p1"));
        rooms.add_player(&code, player("p1"));
        assert!(!rooms.remove_player(&code, "p9"));
        assert!(rooms.remove_player(&code, "p1"));
        assert!(rooms.room(&code).unwrap().players.is_empty());
    }

    #[test]
    fn replaying_joins_and_leaves_matches_last_operation_wins() {
        let mut rooms = InMemoryRooms::new();
        let code = SessionCode::new("AB12CD");
        // join p1, join p2, leave p1, join p3, join p2 (dup), leave p3, join p1
        rooms.add_player(&code, player("p1"));
        rooms.add_player(&code, player("p2"));
        rooms.remove_player(&code, "p1");
        rooms.add_player(&code, player("p3"));
        rooms.add_player(&code, player("p2"));
        rooms.remove_player(&code, "p3");
        rooms.add_player(&code, player("p1"));
        let ids: Vec<_> = rooms
            .room(&code)
            .unwrap()
            .players
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["p2", "p1"]);
    }

    #[test]
    fn rooms_are_independent() {
        let mut rooms = InMemoryRooms::new();
        let a = SessionCode::new("AB12CD");
        let b = SessionCode::new("EF34GH");
        rooms.add_player(&a, player("p1"));
        rooms.add_player(&b, player("p1"));
        rooms.remove_player(&a, "p1");
        assert!(rooms.room(&a).unwrap().players.is_empty());
        assert_eq!(rooms.room(&b).unwrap().players.len(), 1);
    }

    #[test]
    fn host_is_never_assigned_by_the_store() {
        let mut rooms = InMemoryRooms::new();
        let code = SessionCode::new("AB12CD");
        rooms.add_player(&code, player("p1"));
        assert_eq!(rooms.room(&code).unwrap().host_id, None);
    }
}
