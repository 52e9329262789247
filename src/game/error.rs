//! Rejected actions
//!
//! Every variant here is recoverable: the engine leaves its state untouched
//! and the shell asks again.

use thiserror::Error;

use crate::world::RoomId;

/// Why a shot path was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("an arrow can fly through 1 to {max} rooms, not {len}")]
    Length { len: usize, max: usize },
    #[error("there is no room {0}")]
    NoSuchRoom(RoomId),
    #[error("Arrows aren't that crooked - try another room")]
    TooCrooked,
}

/// Why a move or shot was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("there is no room {0}")]
    NoSuchRoom(RoomId),
    #[error("no tunnel leads from room {from} to room {to}")]
    NoTunnel { from: RoomId, to: RoomId },
    #[error("the round is already over")]
    RoundOver,
    #[error(transparent)]
    Path(#[from] PathError),
}
