//! Deterministic scripted runs of a slider.
//!
//! Steps are replayed as gesture events against a real [`Slider`]; frames
//! advance a logical clock by `run.tick_ms`, so a run never depends on wall
//! time.

use crate::config::RulerConfig;
use crate::report::{FinalState, SimulationReport};
use crate::scenario::{Script, ScriptStep};
use anyhow::Result;
use ruler_core::GestureEvent;
use ruler_slider::{CountingHaptics, Slider, SliderUpdate};
use std::sync::{Arc, Mutex};

/// Execute script JSON against a config.
pub fn run_script_json(input: &str, config: &RulerConfig) -> Result<SimulationReport> {
    let script = Script::from_json(input)?;
    run_script(&script, config)
}

/// Execute a pre-loaded script against a config.
pub fn run_script(script: &Script, config: &RulerConfig) -> Result<SimulationReport> {
    config.validate()?;
    let mut run = Run::new(config)?;

    for (step_index, step) in script.steps.iter().enumerate() {
        tracing::debug!(step_index, step = step.name(), clock_ms = run.clock_ms, "step");
        if let Err(message) = run.apply(step) {
            tracing::debug!(step_index, %message, "step failed");
            return Ok(run.into_report().fail(step.name(), step_index, message));
        }
    }

    Ok(run.into_report())
}

struct Run {
    slider: Slider,
    updates: Arc<Mutex<Vec<SliderUpdate>>>,
    haptics: CountingHaptics,
    tick_ms: f64,
    clock_ms: f64,
    elapsed_frames: u64,
}

impl Run {
    fn new(config: &RulerConfig) -> Result<Self> {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let sink = updates.clone();
        let haptics = CountingHaptics::new();

        let slider = Slider::new(config.slider.clone())?
            .with_formatter(config.formatter())
            .with_haptics(haptics.clone())
            .on_change(move |update| {
                if let Ok(mut updates) = sink.lock() {
                    updates.push(update);
                }
            });

        Ok(Self {
            slider,
            updates,
            haptics,
            tick_ms: config.run.tick_ms as f64,
            clock_ms: 0.0,
            elapsed_frames: 0,
        })
    }

    fn apply(&mut self, step: &ScriptStep) -> std::result::Result<(), String> {
        match *step {
            ScriptStep::DragStart { at_ms } => {
                let at_ms = self.timestamp(at_ms.unwrap_or(self.clock_ms))?;
                self.slider.handle_event(&GestureEvent::DragStart {
                    timestamp_ms: Some(at_ms),
                });
            }
            ScriptStep::Drag { dx, at_ms } => {
                let at_ms = self.timestamp(at_ms.unwrap_or(self.clock_ms + self.tick_ms))?;
                self.slider.handle_event(&GestureEvent::DragUpdate {
                    delta_x: dx as f32,
                    timestamp_ms: at_ms,
                });
            }
            ScriptStep::DragEnd => self.slider.handle_event(&GestureEvent::DragEnd),
            ScriptStep::Wait { ms } => {
                let mut remaining_ms = ms as f64;
                for _ in 0..wait_frames(ms, self.tick_ms) {
                    let step_ms = remaining_ms.min(self.tick_ms);
                    remaining_ms -= step_ms;
                    self.frame(step_ms);
                }
            }
            ScriptStep::Settle { max_frames } => {
                let mut frames = 0;
                while self.slider.is_animating() {
                    if frames == max_frames {
                        return Err(format!(
                            "slider still {:?} after {max_frames} frames",
                            self.slider.phase()
                        ));
                    }
                    self.frame(self.tick_ms);
                    frames += 1;
                }
            }
            ScriptStep::AssertValue { value, tolerance } => {
                let actual = self.slider.value();
                if !((actual - value).abs() <= tolerance) {
                    return Err(format!(
                        "expected value {value} (±{tolerance}), got {actual}"
                    ));
                }
            }
        }
        Ok(())
    }

    /// Accept a step timestamp, rejecting time travel
    fn timestamp(&mut self, at_ms: f64) -> std::result::Result<f64, String> {
        if !at_ms.is_finite() || at_ms < self.clock_ms {
            return Err(format!(
                "timestamp {at_ms} ms is before the run clock ({} ms)",
                self.clock_ms
            ));
        }
        self.clock_ms = at_ms;
        Ok(at_ms)
    }

    fn frame(&mut self, dt_ms: f64) {
        self.slider.handle_event(&GestureEvent::Frame { dt_ms });
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        self.clock_ms += dt_ms;
    }

    fn into_report(self) -> SimulationReport {
        let updates = self
            .updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default();
        SimulationReport::passed(
            self.elapsed_frames,
            self.clock_ms,
            updates,
            self.haptics.count(),
            FinalState::capture(&self.slider),
        )
    }
}

fn wait_frames(wait_ms: u64, tick_ms: f64) -> u64 {
    if wait_ms == 0 || tick_ms <= 0.0 {
        return 0;
    }
    (wait_ms as f64 / tick_ms).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_frames_rounds_up() {
        assert_eq!(wait_frames(0, 16.0), 0);
        assert_eq!(wait_frames(16, 16.0), 1);
        assert_eq!(wait_frames(17, 16.0), 2);
        assert_eq!(wait_frames(500, 16.0), 32);
    }

    #[test]
    fn test_wait_advances_clock_exactly() {
        let script = Script::from_json(r#"{"steps": [{"type": "wait", "ms": 50}]}"#).unwrap();
        let report = run_script(&script, &RulerConfig::default()).unwrap();
        assert_eq!(report.elapsed_frames, 4);
        assert_eq!(report.elapsed_ms, 50.0);
    }

    #[test]
    fn test_backwards_timestamp_fails_step() {
        let report = run_script_json(
            r#"{"steps": [
                {"type": "drag_start", "at_ms": 100},
                {"type": "drag", "dx": -5, "at_ms": 50}
            ]}"#,
            &RulerConfig::default(),
        )
        .unwrap();
        assert!(report.is_failed());
        assert_eq!(report.failed_step_index, Some(1));
        assert_eq!(report.assertion.as_deref(), Some("drag"));
    }
}
