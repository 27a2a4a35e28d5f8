//! Ruler configuration file handling

use anyhow::{Context, Result};
use ruler_slider::{SliderConfig, ValueFormatter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Widest viewport the text renderer accepts, in pixels
pub const MAX_VIEWPORT_WIDTH: f64 = 16_384.0;

/// Top-level ruler configuration (ruler.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RulerConfig {
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// How the ruler is presented
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Logical viewport width in pixels
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    /// Decimal places shown for the value
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_viewport_width() -> f64 {
    360.0
}

fn default_decimals() -> u8 {
    1
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            decimals: default_decimals(),
        }
    }
}

/// Headless run settings
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RunConfig {
    /// Logical milliseconds between frames
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    16
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl RulerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No ruler config found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(input: &str) -> Result<Self> {
        let config: RulerConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.slider.validate().context("Invalid [slider] section")?;
        let width = self.display.viewport_width;
        if !(width.is_finite() && width > 0.0 && width <= MAX_VIEWPORT_WIDTH) {
            anyhow::bail!(
                "display.viewport_width must be in (0, {MAX_VIEWPORT_WIDTH}], got {width}"
            );
        }
        if self.run.tick_ms == 0 {
            anyhow::bail!("run.tick_ms must be > 0");
        }
        Ok(())
    }

    /// Replace the viewport width, keeping the config valid
    pub fn set_viewport_width(&mut self, width: f64) -> Result<()> {
        let previous = self.display.viewport_width;
        self.display.viewport_width = width;
        if let Err(err) = self.validate() {
            self.display.viewport_width = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn formatter(&self) -> ValueFormatter {
        ValueFormatter::Decimals(self.display.decimals)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
