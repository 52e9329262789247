//! RON configuration
//!
//! Optional settings file. A missing file means defaults; a broken one is
//! reported so the caller can log it and fall back.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the settings file inside the config directory
const CONFIG_FILE: &str = "config.ron";

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Where log output goes (stdout belongs to the game)
    pub log_file: PathBuf,
    /// Default env_logger filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: PathBuf::from("wumpus.log"),
            log_filter: "info".to_string(),
        }
    }
}

/// Failure reading a config file that does exist
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl GameConfig {
    /// Load from the platform config directory, or defaults if there is no file
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse RON text; omitted fields keep their defaults
    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    /// Open the log file for writing, truncating any previous run.
    ///
    /// Logging is optional: if the file cannot be opened, a warning goes to
    /// stderr and log output is discarded so the game still starts.
    pub fn open_log_file(&self) -> Box<dyn Write + Send> {
        let opened = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.log_file);

        match opened {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to open log file {:?}: {}. Logging disabled.",
                    self.log_file, e
                );
                Box::new(io::sink())
            }
        }
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "wumpus", "Wumpus") {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        PathBuf::from("./wumpus.ron")
    }
}
