//! Data module
//!
//! External settings loaded from RON, with fallback to built-in defaults.

pub mod config;

pub use config::{config_path, ConfigError, GameConfig};
