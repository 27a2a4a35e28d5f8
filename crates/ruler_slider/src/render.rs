//! Ruler render model
//!
//! Turns an offset and a viewport width into the list of tick marks an
//! external renderer should draw. Marks sit at `i * tick_spacing - offset`
//! in viewport coordinates. The list extends past both edges by one viewport
//! plus one spacing so marks never pop in while the ruler moves.

use smallvec::SmallVec;

/// Most marks a single layout will hold
pub const MAX_MARKS: i64 = 1 << 16;

/// A tick mark in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Mark index on the infinite ruler
    pub index: i64,
    /// Horizontal position in pixels
    pub x: f64,
    /// Drawn taller
    pub major: bool,
}

/// Tick marks and center indicator for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RulerLayout {
    pub marks: SmallVec<[TickMark; 64]>,
    /// Position of the fixed center indicator
    pub center_x: f64,
    pub viewport_width: f64,
}

impl RulerLayout {
    /// Lay out the ruler. Degenerate inputs yield no marks.
    pub fn compute(offset: f64, viewport_width: f64, tick_spacing: f64, major_every: u32) -> Self {
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            return Self::default();
        }

        let mut layout = Self {
            marks: SmallVec::new(),
            center_x: viewport_width / 2.0,
            viewport_width,
        };
        if !offset.is_finite() || !(tick_spacing.is_finite() && tick_spacing > 0.0) {
            return layout;
        }

        let visible = (viewport_width / tick_spacing).ceil();
        let margin = tick_spacing * (visible + 1.0);
        let first = ((offset - margin) / tick_spacing).ceil() as i64;
        let last = ((offset + viewport_width + margin) / tick_spacing).floor() as i64;
        let period = i64::from(major_every.max(1));
        if last.saturating_sub(first) >= MAX_MARKS {
            tracing::debug!(viewport_width, tick_spacing, "ruler too dense to lay out");
            return layout;
        }

        for index in first..=last {
            layout.marks.push(TickMark {
                index,
                x: index as f64 * tick_spacing - offset,
                major: index.rem_euclid(period) == 0,
            });
        }

        layout
    }

    /// Marks that are at least partly on screen
    pub fn visible_marks(&self) -> impl Iterator<Item = &TickMark> {
        let width = self.viewport_width;
        self.marks
            .iter()
            .filter(move |mark| mark.x >= 0.0 && mark.x <= width)
    }
}
