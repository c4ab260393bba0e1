//! Configuration file loading for the board session.
//!
//! Embedders tune the interaction layer through a small TOML file. Every
//! field has a default, so an absent file or an empty table both yield a
//! fully working session.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options for the interaction session.
///
/// These gate which render hints the session produces; they never affect
/// legality or board state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Whether `legal_targets` yields squares for the renderer's
    /// legal-move markers. Defaults to true.
    #[serde(default = "default_true")]
    pub show_legal_moves: bool,
    /// Whether dragging over a legal square produces a ghost-piece hint.
    /// Defaults to true.
    #[serde(default = "default_true")]
    pub show_drag_ghost: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            show_legal_moves: true,
            show_drag_ghost: true,
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(SessionConfig::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
