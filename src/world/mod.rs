//! World module
//!
//! Contains the cave graph the hunt takes place in.

pub mod cave;

pub use cave::{Cave, RoomId, ROOM_COUNT, TUNNELS_PER_ROOM};
