//! Haptic feedback seam
//!
//! The slider only decides when a pulse is due. Hosts plug in whatever
//! their platform offers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Receiver of tactile pulses
pub trait HapticFeedback {
    /// A single light impact, fired synchronously on a committed mark crossing
    fn light_impact(&mut self);
}

/// Discards every pulse
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn light_impact(&mut self) {}
}

/// Counts pulses; clones share the same counter
#[derive(Debug, Clone, Default)]
pub struct CountingHaptics {
    pulses: Arc<AtomicUsize>,
}

impl CountingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pulses fired so far
    pub fn count(&self) -> usize {
        self.pulses.load(Ordering::Relaxed)
    }
}

impl HapticFeedback for CountingHaptics {
    fn light_impact(&mut self) {
        self.pulses.fetch_add(1, Ordering::Relaxed);
    }
}

impl<F: FnMut()> HapticFeedback for F {
    fn light_impact(&mut self) {
        self()
    }
}
