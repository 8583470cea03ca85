//! Selection updater - recomputes the selection for a live pointer position.
//!
//! Everything here is pure: given the pre-update selection, the drag state,
//! the live point and the current mode, produce the next selection. The
//! editor decides what to do with it (commit, redraw, notify).
//!
//! ## Resize math
//!
//! Each driven axis is solved independently from two values: `p1`, the live
//! pointer coordinate, and `p2`, the fixed point for the current mode.
//!
//! - normal mode: the fixed point is one edge, the pointer the other
//! - center mode: the rectangle is mirrored around the fixed point
//!
//! The span is capped to the configured max and to the room left between the
//! fixed point and the container edge, then raised to the configured min.
//! When a configured max is below the configured min, max wins.

use super::events::InteractionMode;
use super::state::{Direction, InteractionState, MoveSession, ResizeSession};
use crate::config::CropConfig;
use crate::profile_scope;
use crate::types::{Axis, Point, Selection};

/// Normalized span limits for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Limits along an axis, from the resolved configuration.
    pub fn for_axis(config: &CropConfig, axis: Axis) -> Self {
        Self::new(config.min.normalized(axis), config.max.normalized(axis))
    }

    /// No configured limits: anything inside the container goes.
    pub fn unbounded() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Largest span allowed along an axis for a pointer at `p1` and a fixed
/// point at `p2`: the configured max, capped by the room to the container
/// edge on the pointer's side (both sides, doubled, in center mode).
pub fn max_span(p1: f64, p2: f64, mode: InteractionMode, configured_max: f64) -> f64 {
    let room = match mode {
        InteractionMode::Normal => {
            if p1 < p2 {
                p2
            } else {
                1.0 - p2
            }
        }
        InteractionMode::Center => 2.0 * p2.min(1.0 - p2),
    };
    configured_max.min(room)
}

/// Solve one axis of a resize. Returns `(position, length)`.
pub fn resize_axis(p1: f64, p2: f64, mode: InteractionMode, limits: AxisLimits) -> (f64, f64) {
    let scale = match mode {
        InteractionMode::Normal => 1.0,
        InteractionMode::Center => 2.0,
    };
    let sign = if p1 < p2 { -1.0 } else { 1.0 };

    let max = max_span(p1, p2, mode, limits.max);
    let min = limits.min.min(limits.max);

    let mut span = scale * (p1 - p2).abs();
    if span > max {
        span = max;
    }
    if span < min {
        span = min;
    }

    let p1 = p2 + sign * span / scale;

    match mode {
        InteractionMode::Normal => (p1.min(p2), (p1 - p2).abs()),
        InteractionMode::Center => {
            if p1 <= p2 {
                (p1, 2.0 * (p2 - p1))
            } else {
                (2.0 * p2 - p1, 2.0 * (p1 - p2))
            }
        }
    }
}

/// Translate the selection by the pointer delta since drag start.
pub fn move_selection(selection: &Selection, session: &MoveSession, point: Point) -> Selection {
    let delta = point - session.initial;
    let origin = session.original + delta;
    Selection::new(origin.x, origin.y, selection.w, selection.h)
}

/// Resize the driven axes of the selection.
pub fn resize_selection(
    selection: &Selection,
    session: &ResizeSession,
    point: Point,
    mode: InteractionMode,
    config: &CropConfig,
) -> Selection {
    let fixed = session.fixed_point(mode);
    let mut next = *selection;

    for &axis in session.direction.axes() {
        let (position, length) = resize_axis(
            point.along(axis),
            fixed.along(axis),
            mode,
            AxisLimits::for_axis(config, axis),
        );
        next.set_span(axis, position, length);
    }

    if session.direction == Direction::Both {
        if let Some(ratio) = session.aspect {
            lock_aspect(&mut next, fixed, point, mode, config, ratio);
        }
    }

    next
}

/// Force `w / h == ratio` (normalized units) on a two-axis resize.
///
/// The extent that reaches the pointer wins, the result is scaled down to
/// fit both axis maxima, raised back to the effective minima, then placed
/// against the fixed point.
fn lock_aspect(
    selection: &mut Selection,
    fixed: Point,
    point: Point,
    mode: InteractionMode,
    config: &CropConfig,
    ratio: f64,
) {
    let (mut w, mut h) = (selection.w, selection.h);
    if w <= 0.0 && h <= 0.0 {
        return;
    }

    if h <= 0.0 || w / h > ratio {
        h = w / ratio;
    } else {
        w = h * ratio;
    }

    let max_w = max_span(point.x, fixed.x, mode, config.max.wp);
    let max_h = max_span(point.y, fixed.y, mode, config.max.hp);
    let mut scale: f64 = 1.0;
    if w > max_w {
        scale = scale.min(max_w / w);
    }
    if h > max_h {
        scale = scale.min(max_h / h);
    }
    w *= scale;
    h *= scale;

    // Min wins over the container edge, as in `resize_axis`
    let min_w = config.min.wp.min(config.max.wp);
    let min_h = config.min.hp.min(config.max.hp);
    let mut grow: f64 = 1.0;
    if w > 0.0 && w < min_w {
        grow = grow.max(min_w / w);
    }
    if h > 0.0 && h < min_h {
        grow = grow.max(min_h / h);
    }
    w *= grow;
    h *= grow;

    let place = |p: f64, f: f64, len: f64| match mode {
        InteractionMode::Normal => {
            if p < f {
                f - len
            } else {
                f
            }
        }
        InteractionMode::Center => f - len * 0.5,
    };

    selection.x = place(point.x, fixed.x, w);
    selection.y = place(point.y, fixed.y, h);
    selection.w = w;
    selection.h = h;
}

/// Recompute the selection for the current drag state.
///
/// Idle returns the selection unchanged. Every other result is clamped into
/// the unit square without changing its size.
pub fn update_selection(
    selection: &Selection,
    state: &InteractionState,
    point: Point,
    mode: InteractionMode,
    config: &CropConfig,
) -> Selection {
    profile_scope!("update_selection");

    let mut next = match state {
        InteractionState::Idle => return *selection,
        InteractionState::Moving(session) => move_selection(selection, session, point),
        InteractionState::Resizing(session) => {
            resize_selection(selection, session, point, mode, config)
        }
    };

    next.clamp_to_unit();
    next
}
