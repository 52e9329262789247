//! Entity placement
//!
//! Where the player, the wumpus, the pits and the bats start a round.

use crate::game::Dice;
use crate::world::RoomId;

/// Hazards the player can run into or be warned about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    Wumpus,
    Pit,
    Bat,
}

/// Rooms occupied by every entity in the cave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: RoomId,
    pub wumpus: RoomId,
    pub pits: [RoomId; 2],
    pub bats: [RoomId; 2],
}

impl Placement {
    pub fn new(player: RoomId, wumpus: RoomId, pits: [RoomId; 2], bats: [RoomId; 2]) -> Self {
        Self { player, wumpus, pits, bats }
    }

    /// Draw a fresh placement with every entity in its own room.
    ///
    /// Each attempt rolls all six rooms independently and is thrown away if
    /// any two collide. About a third of attempts collide, so the loop is
    /// left uncapped.
    pub fn random<D: Dice>(dice: &mut D) -> Self {
        let mut attempts = 1u32;
        loop {
            let placement = Self {
                player: dice.room(),
                wumpus: dice.room(),
                pits: [dice.room(), dice.room()],
                bats: [dice.room(), dice.room()],
            };
            if placement.is_distinct() {
                log::debug!("Placed entities after {} attempt(s): {:?}", attempts, placement);
                return placement;
            }
            attempts += 1;
        }
    }

    /// All six rooms in fixed order: player, wumpus, pits, bats
    pub fn rooms(&self) -> [RoomId; 6] {
        [
            self.player,
            self.wumpus,
            self.pits[0],
            self.pits[1],
            self.bats[0],
            self.bats[1],
        ]
    }

    /// Check that no two entities share a room
    pub fn is_distinct(&self) -> bool {
        let rooms = self.rooms();
        rooms
            .iter()
            .enumerate()
            .all(|(i, a)| rooms[i + 1..].iter().all(|b| a != b))
    }

    /// Hazards in their warning order, each paired with its room
    pub fn hazards(&self) -> [(Hazard, RoomId); 5] {
        [
            (Hazard::Wumpus, self.wumpus),
            (Hazard::Pit, self.pits[0]),
            (Hazard::Pit, self.pits[1]),
            (Hazard::Bat, self.bats[0]),
            (Hazard::Bat, self.bats[1]),
        ]
    }

    pub fn is_pit(&self, room: RoomId) -> bool {
        self.pits.contains(&room)
    }

    pub fn is_bat(&self, room: RoomId) -> bool {
        self.bats.contains(&room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dice::testing::ScriptedDice;
    use crate::game::StdDice;
    use crate::world::ROOM_COUNT;

    #[test]
    fn test_random_placement_is_distinct() {
        for seed in 0..200 {
            let mut dice = StdDice::seeded(seed);
            let placement = Placement::random(&mut dice);
            assert!(placement.is_distinct(), "seed {} gave {:?}", seed, placement);
            assert!(placement.rooms().iter().all(|&r| r < ROOM_COUNT));
        }
    }

    #[test]
    fn test_collisions_are_redrawn() {
        // First draw puts both bats in room 9, second is clean
        let mut dice = ScriptedDice::new().rooms(&[0, 1, 2, 3, 9, 9, 10, 11, 12, 13, 14, 15]);
        let placement = Placement::random(&mut dice);
        assert_eq!(placement, Placement::new(10, 11, [12, 13], [14, 15]));
        assert!(dice.is_spent());
    }

    #[test]
    fn test_is_distinct() {
        assert!(Placement::new(0, 1, [2, 3], [4, 5]).is_distinct());
        assert!(!Placement::new(0, 0, [2, 3], [4, 5]).is_distinct());
        assert!(!Placement::new(0, 1, [2, 3], [4, 0]).is_distinct());
    }

    #[test]
    fn test_hazard_lookup() {
        let placement = Placement::new(0, 1, [2, 3], [4, 5]);
        assert!(placement.is_pit(3));
        assert!(!placement.is_pit(4));
        assert!(placement.is_bat(5));
        assert_eq!(placement.hazards()[0], (Hazard::Wumpus, 1));
    }
}
