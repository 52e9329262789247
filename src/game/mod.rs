//! Game module - Core hunt logic and round state

pub mod dice;
mod error;
mod events;
mod path;
mod state;
mod turn;

pub use dice::{Dice, StdDice, WUMPUS_STAYS};
pub use error::{ActionError, PathError};
pub use events::{warning_line, GameEvent, Outcome, RoomView, TurnReport};
pub use path::{check_length, ArrowPath, MAX_PATH_LEN};
pub use state::{Game, STARTING_ARROWS};
