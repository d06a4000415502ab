use crate::trajectory::{Trajectory1D, Trajectory2D, ValueRange};

/// Half-width substituted when a trajectory axis has zero span, so a
/// degenerate bounding box still frames a drawable interval.
const FALLBACK_HALF_SPAN: f64 = 0.5;

/// Closed plotted interval `[lo, hi]`. Framing guarantees `hi > lo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub lo: f64,
    pub hi: f64,
}

impl Extent {
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    pub fn contains_strictly(&self, value: f64) -> bool {
        value > self.lo && value < self.hi
    }
}

/// Plotted extent for a 1-D trajectory: bounding interval padded by
/// `margin * span` on each side.
pub fn frame_1d(trajectory: &Trajectory1D, margin: f64) -> Extent {
    pad(trajectory.range(), margin)
}

/// Plotted extent for a 2-D trajectory. Each axis is padded independently,
/// then the two intervals are unified by overall min/max into one square
/// extent: the landscape grid must be square so the pixel mapping is a
/// uniform scale.
pub fn frame_2d(trajectory: &Trajectory2D, margin: f64) -> Extent {
    let (x_range, y_range) = trajectory.ranges();
    let x_extent = pad(x_range, margin);
    let y_extent = pad(y_range, margin);
    Extent {
        lo: x_extent.lo.min(y_extent.lo),
        hi: x_extent.hi.max(y_extent.hi),
    }
}

fn pad(range: ValueRange, margin: f64) -> Extent {
    let span = range.span();
    if span <= 0.0 {
        return Extent {
            lo: range.min - FALLBACK_HALF_SPAN,
            hi: range.max + FALLBACK_HALF_SPAN,
        };
    }
    Extent {
        lo: range.min - margin * span,
        hi: range.max + margin * span,
    }
}
