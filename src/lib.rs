//! Wumpus - The 1973 cave hunt for the terminal
//!
//! Creep through a twenty-room cave, dodge pits and bats,
//! and put a crooked arrow through the wumpus before it finds you.

pub mod game;
pub mod world;
pub mod entities;
pub mod ui;
pub mod data;

// Re-export commonly used types
pub use game::{Game, Outcome};
pub use entities::Placement;
pub use world::Cave;
