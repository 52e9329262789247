//! UI module
//!
//! The text shell the player talks to.

mod instructions;
mod shell;

pub use instructions::INSTRUCTIONS;
pub use shell::Shell;
