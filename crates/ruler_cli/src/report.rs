//! Report output model for scripted slider runs.

use anyhow::{bail, Result};
use ruler_slider::{Slider, SliderPhase, SliderUpdate};
use serde::Serialize;
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a scripted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Slider state when the run stopped.
#[derive(Debug, Clone, Serialize)]
pub struct FinalState {
    pub value: f64,
    pub formatted: String,
    pub offset: f64,
    pub phase: SliderPhase,
}

impl FinalState {
    pub fn capture(slider: &Slider) -> Self {
        Self {
            value: slider.value(),
            formatted: slider.formatted_value(),
            offset: slider.offset(),
            phase: slider.phase(),
        }
    }
}

/// Machine-readable result of a scripted run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: f64,
    pub updates: Vec<SliderUpdate>,
    pub haptic_pulses: usize,
    pub final_state: FinalState,
}

impl SimulationReport {
    pub fn passed(
        elapsed_frames: u64,
        elapsed_ms: f64,
        updates: Vec<SliderUpdate>,
        haptic_pulses: usize,
        final_state: FinalState,
    ) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            updates,
            haptic_pulses,
            final_state,
        }
    }

    /// Turn a report into a failure at `failed_step_index`
    pub fn fail(mut self, assertion: &str, failed_step_index: usize, message: String) -> Self {
        self.status = ReportStatus::Failed;
        self.failed_step_index = Some(failed_step_index);
        self.assertion = Some(assertion.to_string());
        self.message = Some(message);
        self
    }

    pub fn is_failed(&self) -> bool {
        self.status == ReportStatus::Failed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
