//! Optional TOML configuration for the `availability` CLI.
//!
//! ```toml
//! [display]
//! locale = "en"
//!
//! [slots]
//! length_minutes = 45
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::Path;

use anyhow::{Context, Result};
use availability_engine::Locale;
use serde::Deserialize;

pub const DEFAULT_SLOT_MINUTES: u32 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub slots: SlotsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotsConfig {
    pub length_minutes: Option<u32>,
}

impl CliConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// `--locale` if given, then the file, then French.
    pub fn locale(&self, flag: Option<Locale>) -> Locale {
        flag.or(self.display.locale).unwrap_or_default()
    }

    /// `--length` if given, then the file, then [`DEFAULT_SLOT_MINUTES`].
    pub fn slot_minutes(&self, flag: Option<u32>) -> u32 {
        flag.or(self.slots.length_minutes)
            .unwrap_or(DEFAULT_SLOT_MINUTES)
    }
}
