//! Configuration types for the Astrolabe clipboard.
//!
//! All types implement [`serde::Deserialize`] and every section falls back to
//! its defaults, so an empty file is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`ClipboardConfig`] - Controls how pasted elements are placed.
//! - [`load_config`] - Reads an [`AppConfig`] from a TOML file.
//!
//! # Example
//!
//! ```
//! # use astrolabe::config::AppConfig;
//! let config = AppConfig::from_toml_str("[clipboard]\nkeep_original_positions = true\n")
//!     .expect("valid configuration");
//! assert!(config.clipboard().keep_original_positions());
//! ```

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use crate::error::AstrolabeError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Clipboard configuration section.
    #[serde(default)]
    clipboard: ClipboardConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given clipboard section.
    pub fn new(clipboard: ClipboardConfig) -> Self {
        Self { clipboard }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AstrolabeError::Config`] if the text is not valid TOML or
    /// does not match the configuration layout.
    pub fn from_toml_str(content: &str) -> Result<Self, AstrolabeError> {
        toml::from_str(content).map_err(|e| AstrolabeError::Config(e.to_string()))
    }

    /// Returns the clipboard configuration.
    pub fn clipboard(&self) -> &ClipboardConfig {
        &self.clipboard
    }
}

/// Placement options for pasted elements.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct ClipboardConfig {
    /// Paste at the captured coordinates instead of moving the pasted
    /// elements to the origin.
    #[serde(default)]
    keep_original_positions: bool,
}

impl ClipboardConfig {
    pub fn new(keep_original_positions: bool) -> Self {
        Self {
            keep_original_positions,
        }
    }

    /// Returns whether a plain paste keeps the captured coordinates.
    pub fn keep_original_positions(&self) -> bool {
        self.keep_original_positions
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - The file cannot be read
/// - TOML parsing fails
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, AstrolabeError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path)?;
    AppConfig::from_toml_str(&content)
}
