//! Entities module
//!
//! The player and the things lurking in the cave with them.

pub mod placement;

pub use placement::{Hazard, Placement};
