//! Gesture script definition for headless slider runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Sequence of scripted gesture steps.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Load a script from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a script from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// One scripted action. Timestamps are logical milliseconds; omitted ones
/// are taken from the run clock.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    DragStart {
        #[serde(default)]
        at_ms: Option<f64>,
    },
    /// Pointer moved by `dx` pixels
    Drag {
        dx: f64,
        #[serde(default)]
        at_ms: Option<f64>,
    },
    DragEnd,
    /// Run frames for `ms` logical milliseconds
    Wait { ms: u64 },
    /// Run frames until the slider is idle
    Settle {
        #[serde(default = "default_max_frames")]
        max_frames: u32,
    },
    AssertValue {
        value: f64,
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },
}

fn default_max_frames() -> u32 {
    600
}

fn default_tolerance() -> f64 {
    1e-6
}

impl ScriptStep {
    /// Name used in failure reports
    pub fn name(&self) -> &'static str {
        match self {
            ScriptStep::DragStart { .. } => "drag_start",
            ScriptStep::Drag { .. } => "drag",
            ScriptStep::DragEnd => "drag_end",
            ScriptStep::Wait { .. } => "wait",
            ScriptStep::Settle { .. } => "settle",
            ScriptStep::AssertValue { .. } => "assert_value",
        }
    }
}
