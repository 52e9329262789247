//! Narration produced by the engine
//!
//! The engine never prints. It hands back these values and the shell decides
//! how to show them.

use std::fmt;

use crate::entities::Hazard;
use crate::world::{RoomId, TUNNELS_PER_ROOM};

/// State of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Closing line for a finished round
    pub fn ending_line(&self) -> Option<&'static str> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Won => Some("Hee hee hee - the Wumpus'll getcha next time!!"),
            Outcome::Lost => Some("Ha ha ha - you lose!"),
        }
    }
}

/// Something that happened while resolving an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BumpedWumpus,
    FellIntoPit,
    SnatchedByBats,
    WumpusGotYou,
    ArrowMissed,
    GotTheWumpus,
    ArrowGotYou,
    OutOfArrows,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            GameEvent::BumpedWumpus => "...Oops! Bumped a Wumpus!",
            GameEvent::FellIntoPit => "YYYIIIIEEEE . . . Fell in pit",
            GameEvent::SnatchedByBats => "ZAP--Super bat snatch! Elsewhereville for you!",
            GameEvent::WumpusGotYou => "Tsk tsk tsk - Wumpus got you!",
            GameEvent::ArrowMissed => "Missed",
            GameEvent::GotTheWumpus => "Aha! You got the Wumpus!",
            GameEvent::ArrowGotYou => "Ouch! Arrow got you!",
            GameEvent::OutOfArrows => "You are out of arrows.",
        };
        f.write_str(line)
    }
}

/// Warning text for a hazard one tunnel away
pub fn warning_line(hazard: Hazard) -> &'static str {
    match hazard {
        Hazard::Wumpus => "I smell a wumpus",
        Hazard::Pit => "I feel a draft",
        Hazard::Bat => "Bats nearby",
    }
}

/// What the player can sense from where they stand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub room: RoomId,
    pub tunnels: [RoomId; TUNNELS_PER_ROOM],
    /// One entry per adjacent hazard, so two nearby pits warn twice
    pub warnings: Vec<Hazard>,
}

impl RoomView {
    /// Lines to show the player: warnings first, then the room itself
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .warnings
            .iter()
            .map(|&h| warning_line(h).to_string())
            .collect();
        lines.push(format!("You are in room {}", self.room));
        let [a, b, c] = self.tunnels;
        lines.push(format!("Tunnels lead to rooms {} {} {}", a, b, c));
        lines
    }
}

/// Result of one resolved action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<GameEvent>,
    pub outcome: Outcome,
    pub arrows: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_view_lines() {
        let view = RoomView {
            room: 0,
            tunnels: [1, 4, 7],
            warnings: vec![Hazard::Wumpus, Hazard::Pit, Hazard::Pit],
        };
        assert_eq!(
            view.lines(),
            vec![
                "I smell a wumpus",
                "I feel a draft",
                "I feel a draft",
                "You are in room 0",
                "Tunnels lead to rooms 1 4 7",
            ]
        );
    }

    #[test]
    fn test_ending_lines() {
        assert_eq!(Outcome::Ongoing.ending_line(), None);
        assert!(Outcome::Won.ending_line().unwrap().contains("getcha next time"));
        assert!(Outcome::Lost.ending_line().unwrap().contains("you lose"));
        assert!(!Outcome::Ongoing.is_over());
        assert!(Outcome::Lost.is_over());
    }
}
