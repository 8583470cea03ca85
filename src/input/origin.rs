//! Origin (anchor) resolution.
//!
//! Given a pointer position, classify which part of the selection it targets.
//! The answer is phrased as the *fixed* side: pressing near the left edge
//! anchors the right edge, so the x anchor is `End`.

use crate::constants::{ANCHOR_END, ANCHOR_FREE, ANCHOR_START};
use crate::types::{Axis, Point, Selection};

/// Anchor on a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisAnchor {
    /// Fixed point on the start (left/top) edge; the pointer holds the end edge
    Start,
    /// Pointer is between the edges; the axis is free
    Free,
    /// Fixed point on the end (right/bottom) edge; the pointer holds the start edge
    End,
}

impl AxisAnchor {
    /// Position of the fixed point as a fraction of the selection length.
    pub fn fraction(self) -> f64 {
        match self {
            AxisAnchor::Start => ANCHOR_START,
            AxisAnchor::Free => ANCHOR_FREE,
            AxisAnchor::End => ANCHOR_END,
        }
    }

    /// Percentage key used by the cursor table (0, 50 or 100).
    pub fn percent(self) -> u8 {
        (self.fraction() * 100.0) as u8
    }

    pub fn is_anchored(self) -> bool {
        self != AxisAnchor::Free
    }

    /// The anchor on the opposite edge. `Free` mirrors to itself.
    pub fn mirrored(self) -> Self {
        match self {
            AxisAnchor::Start => AxisAnchor::End,
            AxisAnchor::Free => AxisAnchor::Free,
            AxisAnchor::End => AxisAnchor::Start,
        }
    }
}

/// Per-axis anchors. An axis is `None` when the point is outside the
/// selection's extent on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub x: Option<AxisAnchor>,
    pub y: Option<AxisAnchor>,
}

impl Anchor {
    pub const fn new(x: Option<AxisAnchor>, y: Option<AxisAnchor>) -> Self {
        Self { x, y }
    }

    pub const fn both(x: AxisAnchor, y: AxisAnchor) -> Self {
        Self::new(Some(x), Some(y))
    }

    pub fn along(&self, axis: Axis) -> Option<AxisAnchor> {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// True when neither axis resolved.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    /// Both axes are free: the pointer is inside the selection body.
    pub fn is_center(&self) -> bool {
        self.x == Some(AxisAnchor::Free) && self.y == Some(AxisAnchor::Free)
    }
}

/// Resolve the anchor for `point`. `None` when there is no selection.
///
/// Each axis is tested independently in a fixed order: start edge band,
/// end edge band, then the span between. A point inside both bands (a
/// selection narrower than twice the margin) resolves to the start edge.
pub fn resolve_origin(point: Point, selection: Option<&Selection>, margin: f64) -> Option<Anchor> {
    let sel = selection?;

    Some(Anchor {
        x: resolve_axis(point.x, sel.x, sel.w, margin),
        y: resolve_axis(point.y, sel.y, sel.h, margin),
    })
}

fn resolve_axis(p: f64, start: f64, length: f64, margin: f64) -> Option<AxisAnchor> {
    let end = start + length;

    if p >= start - margin && p <= start + margin {
        Some(AxisAnchor::End)
    } else if p >= end - margin && p <= end + margin {
        Some(AxisAnchor::Start)
    } else if p >= start - margin && p <= end + margin {
        Some(AxisAnchor::Free)
    } else {
        None
    }
}
