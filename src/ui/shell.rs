//! Line-based interaction shell
//!
//! Prompts the player, turns their answers into engine calls and prints the
//! narration that comes back. Works over any reader/writer pair, which is
//! how the tests drive whole sessions.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::instructions::INSTRUCTIONS;
use crate::game::{
    check_length, ActionError, ArrowPath, Dice, Game, Outcome, PathError, StdDice, TurnReport,
};
use crate::world::RoomId;

/// What the player chose to do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Shoot,
    Move,
}

/// Drives a [`Game`] over a text channel
pub struct Shell<R, W, D: Dice = StdDice> {
    input: R,
    output: W,
    game: Game<D>,
}

impl<R: BufRead, W: Write, D: Dice> Shell<R, W, D> {
    pub fn new(input: R, output: W, game: Game<D>) -> Self {
        Self { input, output, game }
    }

    pub fn game(&self) -> &Game<D> {
        &self.game
    }

    /// Play rounds until the input runs out
    pub fn run(&mut self) -> Result<()> {
        let Some(answer) = self.ask("Instructions (y/n)? ")? else {
            return Ok(());
        };
        if answer != "n" {
            writeln!(self.output, "{}", INSTRUCTIONS)?;
        }
        writeln!(self.output, "Hunt the Wumpus")?;

        let mut rounds = 0u32;
        loop {
            rounds += 1;
            log::info!("Round {} begins", rounds);
            let Some(outcome) = self.play_round()? else {
                break;
            };
            log::info!("Round {} ended: {:?}", rounds, outcome);
            if let Some(line) = outcome.ending_line() {
                writeln!(self.output, "{}", line)?;
            }

            let Some(answer) = self.ask("Same setup (y/n)? ")? else {
                break;
            };
            self.game.begin_round(answer == "y");
        }

        log::info!("Input closed after {} round(s)", rounds);
        Ok(())
    }

    /// Take turns until the round ends. `None` means the input closed.
    fn play_round(&mut self) -> Result<Option<Outcome>> {
        while !self.game.current_outcome().is_over() {
            self.show_room()?;
            let Some(action) = self.choose_action()? else {
                return Ok(None);
            };
            let report = match action {
                Action::Shoot => self.shoot()?,
                Action::Move => self.move_player()?,
            };
            let Some(report) = report else {
                return Ok(None);
            };
            self.narrate(&report)?;
        }
        Ok(Some(self.game.current_outcome()))
    }

    fn show_room(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for line in self.game.describe_current_room().lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)
    }

    fn choose_action(&mut self) -> io::Result<Option<Action>> {
        loop {
            let Some(answer) = self.ask("Shoot or move (s/m)? ")? else {
                return Ok(None);
            };
            match answer.as_str() {
                "s" => return Ok(Some(Action::Shoot)),
                "m" => return Ok(Some(Action::Move)),
                _ => {}
            }
        }
    }

    fn move_player(&mut self) -> Result<Option<TurnReport>> {
        loop {
            let Some(target) = self.ask_number("Where to? ")? else {
                return Ok(None);
            };
            match self.game.attempt_move(target) {
                Ok(report) => return Ok(Some(report)),
                Err(ActionError::NoSuchRoom(_)) => {}
                Err(ActionError::NoTunnel { .. }) => writeln!(self.output, "Not possible -")?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn shoot(&mut self) -> Result<Option<TurnReport>> {
        let len = loop {
            let Some(len) = self.ask_number("Number of rooms (1-5)? ")? else {
                return Ok(None);
            };
            if check_length(len).is_ok() {
                break len;
            }
        };

        let mut path = ArrowPath::new();
        while path.len() < len {
            let Some(room) = self.ask_number("Room number? ")? else {
                return Ok(None);
            };
            match path.push(room) {
                Ok(()) => {}
                Err(e @ PathError::TooCrooked) => writeln!(self.output, "{}", e)?,
                Err(_) => {}
            }
        }

        Ok(Some(self.game.attempt_shot(path.rooms())?))
    }

    fn narrate(&mut self, report: &TurnReport) -> io::Result<()> {
        for event in &report.events {
            writeln!(self.output, "{}", event)?;
        }
        Ok(())
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer is a non-negative integer
    fn ask_number(&mut self, prompt: &str) -> io::Result<Option<RoomId>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Ok(n) = answer.parse() {
                return Ok(Some(n));
            }
            log::debug!("Ignoring non-numeric answer {:?}", answer);
        }
    }
}
