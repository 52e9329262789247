//! Game state
//!
//! Holds everything that lives across turns: the cave, where everyone is,
//! how many arrows are left and whether the round is still running.

use super::dice::{Dice, StdDice};
use super::events::{Outcome, RoomView};
use crate::entities::Placement;
use crate::world::Cave;

/// Arrows in the quiver at the start of every round
pub const STARTING_ARROWS: u32 = 5;

/// The hunt engine
#[derive(Debug)]
pub struct Game<D: Dice = StdDice> {
    /// Fixed cave graph
    pub(super) cave: Cave,
    /// Current positions, mutated during play
    pub(super) placement: Placement,
    /// Positions at the start of the current round, for "same setup"
    memo: Option<Placement>,
    /// Arrows left this round
    pub(super) arrows: u32,
    /// Round state, recomputed as actions resolve
    pub(super) outcome: Outcome,
    /// Random source for every draw
    pub(super) dice: D,
}

impl Game<StdDice> {
    /// Create a game seeded from system entropy and start the first round
    pub fn new() -> Self {
        Self::with_dice(StdDice::from_entropy())
    }

    /// Create a reproducible game and start the first round
    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(StdDice::seeded(seed))
    }
}

impl Default for Game<StdDice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dice> Game<D> {
    /// Create a game on top of any dice and start the first round
    pub fn with_dice(mut dice: D) -> Self {
        let placement = Placement::random(&mut dice);
        let mut game = Self {
            cave: Cave::new(),
            placement,
            memo: None,
            arrows: STARTING_ARROWS,
            outcome: Outcome::Ongoing,
            dice,
        };
        game.begin_round_with(placement);
        game
    }

    /// Start a new round.
    ///
    /// With `reuse_previous_layout` the positions go back to where the
    /// previous round started. Without it, or before any round has been
    /// played, a fresh layout is drawn.
    pub fn begin_round(&mut self, reuse_previous_layout: bool) {
        match self.memo {
            Some(memo) if reuse_previous_layout => {
                log::info!("Replaying layout {:?}", memo);
                self.begin_round_with(memo);
            }
            _ => {
                let placement = Placement::random(&mut self.dice);
                log::info!("New layout {:?}", placement);
                self.begin_round_with(placement);
            }
        }
    }

    /// Start a round from an explicit layout, which also becomes the replay memo
    pub fn begin_round_with(&mut self, placement: Placement) {
        debug_assert!(placement.is_distinct(), "entities must start apart");
        self.placement = placement;
        self.memo = Some(placement);
        self.arrows = STARTING_ARROWS;
        self.outcome = Outcome::Ongoing;
    }

    /// Warnings, room number and tunnels for the player's current room
    pub fn describe_current_room(&self) -> RoomView {
        let room = self.placement.player;
        let tunnels = self.cave.neighbors(room);
        let warnings = self
            .placement
            .hazards()
            .into_iter()
            .filter(|&(_, at)| tunnels.contains(&at))
            .map(|(hazard, _)| hazard)
            .collect();
        RoomView { room, tunnels, warnings }
    }

    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Layout the current round started from
    pub fn replay_memo(&self) -> Option<&Placement> {
        self.memo.as_ref()
    }

    pub fn cave(&self) -> &Cave {
        &self.cave
    }
}
