//! Slider state machine
//!
//! Owns the committed value and the continuous ruler offset, and turns drag
//! deltas and glide frames into quantized, bounded value changes.
//!
//! Two offsets are tracked side by side:
//!
//! - `raw_offset` is the undamped drag position. Drag deltas and glide
//!   targets are expressed against it.
//! - `offset` is what the renderer draws. It equals `raw_offset` until the
//!   drag passes the offset of a bound; the distance beyond that point is
//!   compressed continuously, so every extra pixel moves the ruler less.
//!
//! `last_committed_mark_offset` is the raw position at which the last
//! crossing decision was made. It moves on every crossing, committed or
//! rejected, and never on sub-tick motion.

use ruler_core::events::{event_types, GestureEvent};
use ruler_core::fsm::StateMachine;

use crate::config::SliderConfig;
use crate::error::Result;
use crate::format::ValueFormatter;
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::motion::{Motion, MotionKind};
use crate::phase::SliderPhase;
use crate::render::RulerLayout;
use crate::update::{RenderState, SlideDirection, SliderUpdate};

/// Value-change callback
pub type ChangeCallback = Box<dyn FnMut(SliderUpdate) + Send>;

/// An unresolved push past one of the bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overscroll {
    /// The bound that was exceeded
    pub bound: f64,
    /// The rejected value the drag would have reached
    pub proposed: f64,
}

impl Overscroll {
    /// Distance of the proposed value beyond the bound, in value units
    pub fn magnitude(&self) -> f64 {
        (self.proposed - self.bound).abs()
    }
}

/// Ruler slider
pub struct Slider {
    config: SliderConfig,
    value: f64,
    last_value: f64,
    direction: SlideDirection,
    offset: f64,
    raw_offset: f64,
    last_committed_mark_offset: f64,
    /// Raw offset at which the current value was committed
    committed_offset: f64,
    /// Offset-space velocity in px/s
    velocity: f64,
    last_event_timestamp: Option<f64>,
    overscroll: Option<Overscroll>,
    motion: Option<Motion>,
    phase: StateMachine<SliderPhase>,
    on_change: Option<ChangeCallback>,
    haptics: Box<dyn HapticFeedback + Send>,
    formatter: ValueFormatter,
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("value", &self.value)
            .field("offset", &self.offset)
            .field("raw_offset", &self.raw_offset)
            .field("velocity", &self.velocity)
            .field("overscroll", &self.overscroll)
            .field("phase", &self.phase.current_state())
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Create a slider, failing fast on an invalid config
    pub fn new(config: SliderConfig) -> Result<Self> {
        config.validate()?;
        let value = config.initial_value;

        Ok(Self {
            config,
            value,
            last_value: value,
            direction: SlideDirection::None,
            offset: 0.0,
            raw_offset: 0.0,
            last_committed_mark_offset: 0.0,
            committed_offset: 0.0,
            velocity: 0.0,
            last_event_timestamp: None,
            overscroll: None,
            motion: None,
            phase: StateMachine::new(SliderPhase::Idle),
            on_change: None,
            haptics: Box::new(NoHaptics),
            formatter: ValueFormatter::default(),
        })
    }

    /// Set the value-change callback
    pub fn on_change<F: FnMut(SliderUpdate) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the haptic feedback receiver
    pub fn with_haptics<H: HapticFeedback + Send + 'static>(mut self, haptics: H) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Set the value formatter
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Committed value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Rendered ruler offset in pixels
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Undamped drag position in pixels
    pub fn raw_offset(&self) -> f64 {
        self.raw_offset
    }

    /// Last measured drag velocity in offset space (px/s)
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Direction of the last committed change
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn phase(&self) -> SliderPhase {
        self.phase.current_state()
    }

    /// Pending overscroll, if the last crossing was rejected
    pub fn overscroll(&self) -> Option<Overscroll> {
        self.overscroll
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Kind of the running motion, if any
    pub fn motion_kind(&self) -> Option<MotionKind> {
        self.motion.as_ref().map(Motion::kind)
    }

    /// Snapshot for the renderer
    pub fn render_state(&self) -> RenderState {
        RenderState {
            offset: self.offset,
            value: self.value,
            direction: self.direction,
            phase: self.phase(),
        }
    }

    /// Tick marks for a viewport of the given width
    pub fn layout(&self, viewport_width: f64) -> RulerLayout {
        RulerLayout::compute(
            self.offset,
            viewport_width,
            self.config.tick_spacing,
            self.config.major_tick_every,
        )
    }

    /// Display text for the committed value
    pub fn formatted_value(&self) -> String {
        self.formatter.format(self.value)
    }

    /// Dispatch a gesture or frame event
    pub fn handle_event(&mut self, event: &GestureEvent) {
        match *event {
            GestureEvent::DragStart { timestamp_ms } => self.on_drag_start(timestamp_ms),
            GestureEvent::DragUpdate {
                delta_x,
                timestamp_ms,
            } => self.on_drag_update(f64::from(delta_x), timestamp_ms),
            GestureEvent::DragEnd => self.on_drag_end(),
            GestureEvent::Frame { dt_ms } => {
                self.advance(dt_ms);
            }
        }
    }

    /// Pointer down: stop any motion and start a new drag session
    pub fn on_drag_start(&mut self, timestamp_ms: Option<f64>) {
        if let Some(motion) = self.motion.take() {
            tracing::debug!(
                kind = ?motion.kind(),
                elapsed_ms = motion.elapsed_ms(),
                "motion cancelled by drag"
            );
            if motion.kind() == MotionKind::SnapBack {
                // The ruler stays where the snap left it, with the bound
                // re-anchored there so the next move does not jump
                self.raw_offset = self.offset;
                self.committed_offset = self.offset;
            }
        }

        self.velocity = 0.0;
        self.last_committed_mark_offset = self.raw_offset;
        self.last_event_timestamp = timestamp_ms.filter(|t| t.is_finite());
        self.phase.send(event_types::DRAG_START);
    }

    /// Pointer moved horizontally by `delta_x` pixels
    pub fn on_drag_update(&mut self, delta_x: f64, timestamp_ms: f64) {
        if !self.phase.is_in(SliderPhase::Dragging) {
            tracing::debug!(delta_x, "drag update outside a drag session ignored");
            return;
        }
        let offset_delta = self.config.polarity.offset_delta(delta_x);
        if !offset_delta.is_finite() {
            tracing::debug!(delta_x, "non-finite drag delta ignored");
            return;
        }

        match self.last_event_timestamp {
            Some(last) if timestamp_ms > last => {
                let elapsed_secs = (timestamp_ms - last) / 1000.0;
                self.velocity = offset_delta / elapsed_secs;
            }
            Some(last) => {
                tracing::trace!(last, timestamp_ms, "no elapsed time, velocity kept");
            }
            None => {
                tracing::trace!("first timestamp of the drag, velocity kept");
            }
        }
        if timestamp_ms.is_finite() {
            self.last_event_timestamp = Some(timestamp_ms);
        }

        self.update_offset(self.raw_offset + offset_delta);
    }

    /// Pointer lifted: glide, snap back, or simply settle.
    ///
    /// Emits exactly one update with [`SlideDirection::None`].
    pub fn on_drag_end(&mut self) {
        if !self.phase.is_in(SliderPhase::Dragging) {
            tracing::debug!("drag end outside a drag session ignored");
            return;
        }
        self.last_event_timestamp = None;

        let velocity = self.velocity;
        if self.config.inertia_enabled && velocity.abs() > self.config.min_fling_velocity {
            let duration_ms = self.config.inertia_duration_ms(velocity);
            tracing::debug!(velocity, duration_ms, "glide started");
            self.motion = Some(Motion::inertia(self.raw_offset, velocity, duration_ms));
            self.phase.send(event_types::FLING);
        } else if let Some(overscroll) = self.pending_overscroll() {
            self.begin_snap_back(overscroll);
        } else {
            self.phase.send(event_types::DRAG_END);
        }

        self.emit(SliderUpdate::settled(self.value));
    }

    /// Move the drag position by `delta` pixels of offset space
    pub fn apply_offset_delta(&mut self, delta: f64) {
        if delta.is_finite() {
            self.update_offset(self.raw_offset + delta);
        }
    }

    /// Advance the running motion by one host frame.
    ///
    /// Returns `true` while the slider still needs frames.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };
        let kind = motion.kind();
        let frame = motion.advance(dt_ms);

        match kind {
            MotionKind::Inertia => self.update_offset(frame.target),
            MotionKind::SnapBack => {
                self.offset = frame.target;
                self.raw_offset = frame.target;
            }
        }

        if frame.done {
            self.motion = None;
            tracing::debug!(?kind, offset = self.offset, "motion finished");
            match (kind, self.pending_overscroll()) {
                (MotionKind::Inertia, Some(overscroll)) => {
                    let previous = self.value;
                    self.begin_snap_back(overscroll);
                    if self.value != previous {
                        let direction = SlideDirection::between(previous, self.value);
                        self.direction = direction;
                        self.emit(SliderUpdate::new(self.value, direction));
                    }
                }
                _ => {
                    self.phase.send(event_types::SETTLED);
                }
            }
        }

        self.motion.is_some()
    }

    /// Jump to `value` programmatically, keeping the ruler aligned.
    ///
    /// Cancels any motion. Emits an update when the value changes.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        self.config.check_in_range(value)?;

        if self.motion.take().is_some() {
            self.phase.send(event_types::SETTLED);
        }
        if let Some(overscroll) = self.overscroll.take() {
            tracing::debug!(?overscroll, "overscroll discarded by programmatic set");
            self.offset = self.committed_offset;
            self.raw_offset = self.committed_offset;
            self.last_committed_mark_offset = self.committed_offset;
        }
        if value == self.value {
            return Ok(());
        }

        let target = self.offset_for_value(value);
        self.last_committed_mark_offset = target;
        self.commit(value, target, false);
        Ok(())
    }

    /// Core offset-update routine shared by drags and glides
    fn update_offset(&mut self, new_offset: f64) {
        let spacing = self.config.tick_spacing;
        let marks = self
            .config
            .mark_rounding
            .quantize((new_offset - self.last_committed_mark_offset) / spacing);
        self.raw_offset = new_offset;

        if marks == 0.0 {
            // Sub-tick motion moves the ruler only
            self.offset = self.damped(new_offset);
            tracing::trace!(new_offset, offset = self.offset, "sub-tick move");
            return;
        }

        let base = self.overscroll.map_or(self.value, |o| o.proposed);
        let proposed = base + marks * self.config.sensitivity;
        self.last_committed_mark_offset = new_offset;

        if self.config.contains(proposed) {
            self.commit(proposed, new_offset, true);
        } else {
            let bound = if proposed > self.config.max_value {
                self.config.max_value
            } else {
                self.config.min_value
            };
            let overscroll = Overscroll { bound, proposed };
            self.overscroll = Some(overscroll);
            self.offset = self.damped(new_offset);
            tracing::debug!(
                proposed,
                bound,
                magnitude = overscroll.magnitude(),
                offset = self.offset,
                raw_offset = new_offset,
                "overscroll"
            );
        }
    }

    /// Rendered offset for a raw drag position.
    ///
    /// The distance `d` past a bound's offset is drawn as `d / (1 + m)`, where
    /// `m` is `d` in value units. At whole marks `m` equals the overscroll
    /// magnitude, and the rendered offset is monotone in `d`.
    fn damped(&self, raw_offset: f64) -> f64 {
        let Some((_, anchor)) = self.exceeded_bound(raw_offset) else {
            return raw_offset;
        };
        let distance = raw_offset - anchor;
        let magnitude = distance.abs() / self.config.tick_spacing * self.config.sensitivity;
        anchor + distance / (1.0 + magnitude)
    }

    /// The bound whose offset `raw_offset` lies beyond, with that offset
    fn exceeded_bound(&self, raw_offset: f64) -> Option<(f64, f64)> {
        let upper = self.offset_for_value(self.config.max_value);
        if upper.is_finite() && raw_offset > upper {
            return Some((self.config.max_value, upper));
        }
        let lower = self.offset_for_value(self.config.min_value);
        if lower.is_finite() && raw_offset < lower {
            return Some((self.config.min_value, lower));
        }
        None
    }

    /// Overscroll to resolve on release.
    ///
    /// A rejected crossing, or a ruler held at its bound and pulled less than
    /// a mark past it.
    fn pending_overscroll(&self) -> Option<Overscroll> {
        self.overscroll.or_else(|| {
            self.exceeded_bound(self.raw_offset)
                .filter(|(bound, _)| *bound == self.value)
                .map(|(bound, _)| Overscroll {
                    bound,
                    proposed: bound,
                })
        })
    }

    /// Offset at which `value` sits relative to the committed value
    fn offset_for_value(&self, value: f64) -> f64 {
        self.committed_offset
            + (value - self.value) / self.config.sensitivity * self.config.tick_spacing
    }

    fn commit(&mut self, value: f64, offset: f64, crossing: bool) {
        self.value = value;
        self.offset = offset;
        self.raw_offset = offset;
        self.committed_offset = offset;
        self.overscroll = None;

        if crossing && self.config.haptics_enabled {
            self.haptics.light_impact();
        }

        // Returning from an overscroll can land on the value already held
        let direction = SlideDirection::between(self.last_value, value);
        if direction == SlideDirection::None {
            return;
        }
        self.direction = direction;
        tracing::trace!(value, ?direction, offset, "value committed");
        self.emit(SliderUpdate::new(value, direction));
        self.last_value = value;
    }

    /// Commit the exceeded bound and animate the ruler to it. Does not emit.
    fn begin_snap_back(&mut self, overscroll: Overscroll) {
        let target = self.offset_for_value(overscroll.bound);
        let from = self.offset;
        let duration_ms = self.config.inertia_max_duration_ms;

        self.overscroll = None;
        self.value = overscroll.bound;
        self.last_value = overscroll.bound;
        self.direction = SlideDirection::None;
        self.committed_offset = target;
        self.last_committed_mark_offset = target;
        self.raw_offset = from;

        tracing::debug!(
            bound = overscroll.bound,
            proposed = overscroll.proposed,
            from,
            target,
            duration_ms,
            "snap-back started"
        );

        self.phase.send(event_types::OVERSCROLL_RELEASE);
        let mut motion = Motion::snap_back(from, target, duration_ms);
        if duration_ms == 0 {
            let frame = motion.advance(0.0);
            self.offset = frame.target;
            self.raw_offset = frame.target;
            self.phase.send(event_types::SETTLED);
        } else {
            self.motion = Some(motion);
        }
    }

    fn emit(&mut self, update: SliderUpdate) {
        if let Some(ref mut callback) = self.on_change {
            callback(update);
        }
    }
}
