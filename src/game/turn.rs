//! Turn resolution
//!
//! Moving, shooting and what happens when the wumpus wakes up.

use super::dice::{Dice, WUMPUS_STAYS};
use super::error::ActionError;
use super::events::{GameEvent, Outcome, TurnReport};
use super::path::ArrowPath;
use super::state::Game;
use crate::world::RoomId;

impl<D: Dice> Game<D> {
    /// Move the player to `target` and resolve whatever is waiting there.
    ///
    /// Staying put is allowed. Anything other than the current room or one
    /// of its tunnels is refused without touching the game.
    pub fn attempt_move(&mut self, target: RoomId) -> Result<TurnReport, ActionError> {
        self.ensure_ongoing()?;
        if !self.cave.contains(target) {
            return Err(ActionError::NoSuchRoom(target));
        }
        let from = self.placement.player;
        if target != from && !self.cave.is_adjacent(from, target) {
            return Err(ActionError::NoTunnel { from, to: target });
        }

        log::debug!("Player moves {} -> {}", from, target);
        let mut events = Vec::new();
        self.enter_room(target, &mut events);
        Ok(self.report(events))
    }

    /// Fire an arrow along `path` and resolve the shot.
    ///
    /// The path is validated first; a rejected path costs nothing.
    pub fn attempt_shot(&mut self, path: &[RoomId]) -> Result<TurnReport, ActionError> {
        self.ensure_ongoing()?;
        let path = ArrowPath::from_rooms(path)?;

        let mut events = Vec::new();
        let mut arrow = self.placement.player;
        let mut impact = false;

        for &aim in path.rooms() {
            arrow = if self.cave.is_adjacent(arrow, aim) {
                aim
            } else {
                let deflected = self.cave.neighbors(arrow)[self.dice.tunnel()];
                log::debug!("No tunnel {} -> {}, arrow veers into {}", arrow, aim, deflected);
                deflected
            };

            if arrow == self.placement.wumpus {
                events.push(GameEvent::GotTheWumpus);
                self.outcome = Outcome::Won;
                impact = true;
                break;
            }
            if arrow == self.placement.player {
                events.push(GameEvent::ArrowGotYou);
                self.outcome = Outcome::Lost;
                impact = true;
                break;
            }
        }

        if !impact {
            events.push(GameEvent::ArrowMissed);
            self.disturb_wumpus(&mut events);
        }

        self.arrows = self.arrows.saturating_sub(1);
        if self.arrows == 0 && self.outcome == Outcome::Ongoing {
            events.push(GameEvent::OutOfArrows);
            self.outcome = Outcome::Lost;
        }
        Ok(self.report(events))
    }

    /// Put the player in `room` and apply hazards until they land somewhere safe
    fn enter_room(&mut self, mut room: RoomId, events: &mut Vec<GameEvent>) {
        loop {
            self.placement.player = room;

            // The wumpus ignores hazards, so a bumped wumpus may share a pit
            // or bat room with the player
            if room == self.placement.wumpus {
                events.push(GameEvent::BumpedWumpus);
                self.disturb_wumpus(events);
                if self.outcome.is_over() {
                    return;
                }
            }
            if self.placement.is_pit(room) {
                events.push(GameEvent::FellIntoPit);
                self.outcome = Outcome::Lost;
            } else if self.placement.is_bat(room) {
                events.push(GameEvent::SnatchedByBats);
                room = self.dice.room();
                log::debug!("Bats drop the player in room {}", room);
                continue;
            }
            return;
        }
    }

    /// Wake the wumpus. It either wanders down a tunnel or stays put,
    /// and only a wumpus that stays put can catch the player.
    fn disturb_wumpus(&mut self, events: &mut Vec<GameEvent>) {
        let roll = self.dice.wumpus_wake();
        if roll == WUMPUS_STAYS {
            log::debug!("Wumpus stays in room {}", self.placement.wumpus);
            if self.placement.player == self.placement.wumpus {
                events.push(GameEvent::WumpusGotYou);
                self.outcome = Outcome::Lost;
            }
        } else {
            let to = self.cave.neighbors(self.placement.wumpus)[roll];
            log::debug!("Wumpus moves {} -> {}", self.placement.wumpus, to);
            self.placement.wumpus = to;
        }
    }

    fn ensure_ongoing(&self) -> Result<(), ActionError> {
        if self.outcome.is_over() {
            Err(ActionError::RoundOver)
        } else {
            Ok(())
        }
    }

    fn report(&self, events: Vec<GameEvent>) -> TurnReport {
        TurnReport {
            events,
            outcome: self.outcome,
            arrows: self.arrows,
        }
    }
}
