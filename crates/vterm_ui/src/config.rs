//! User configuration
//!
//! Optional `~/.config/vterm/config.toml` toggling the boot banner, color
//! output, and audible cues. A missing or malformed file falls back to
//! defaults with a warning in the log, never an abort.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// UI toggles, all on by default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Boot progress animation and warning banner.
    pub banner: bool,
    /// Colored prompt and notices.
    pub color: bool,
    /// Audible feedback cue on error/success notices.
    pub cues: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner: true,
            color: true,
            cues: true,
        }
    }
}

impl UiConfig {
    /// Load the user's config file, falling back to defaults.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(text) => Self::parse(&text),
                Err(_) => Self::default(),
            },
            None => Self::default(),
        }
    }

    /// The config file location, when a config directory exists.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vterm").join("config.toml"))
    }

    /// Parse config text; malformed input degrades to defaults.
    pub fn parse(text: &str) -> Self {
        toml::from_str(text).unwrap_or_else(|err| {
            warn!(error = %err, "malformed config, using defaults");
            Self::default()
        })
    }
}
