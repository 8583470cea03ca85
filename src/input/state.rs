//! Drag state machine - the single source of truth for what a drag is doing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Moving      (press inside the selection body)
//! Idle -> Resizing    (press on an edge/corner band, or outside a
//!                      non-persistent selection to draw a new one)
//!
//! Any  -> Idle        (release, pointer leave, or interaction not allowed)
//! ```
//!
//! Each non-idle state carries the drag session captured at drag start; the
//! session is dropped with the state.

use super::events::InteractionMode;
use super::origin::{Anchor, AxisAnchor};
use crate::types::{Axis, Point, Selection};

/// Which axes a resize drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Only x/width change
    Horizontal,
    /// Only y/height change
    Vertical,
    /// Both axes change
    Both,
}

impl Direction {
    /// Direction for an anchor: every non-free axis is driven.
    /// `None` when neither axis is anchored (a move, not a resize).
    pub fn from_anchor(anchor: &Anchor) -> Option<Self> {
        let x = anchor.x.is_some_and(AxisAnchor::is_anchored);
        let y = anchor.y.is_some_and(AxisAnchor::is_anchored);

        match (x, y) {
            (true, true) => Some(Direction::Both),
            (true, false) => Some(Direction::Horizontal),
            (false, true) => Some(Direction::Vertical),
            (false, false) => None,
        }
    }

    /// Axes driven by this direction.
    pub fn axes(self) -> &'static [Axis] {
        match self {
            Direction::Horizontal => &[Axis::Horizontal],
            Direction::Vertical => &[Axis::Vertical],
            Direction::Both => &[Axis::Horizontal, Axis::Vertical],
        }
    }

    pub fn drives(self, axis: Axis) -> bool {
        self.axes().contains(&axis)
    }
}

/// Session data for a move drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveSession {
    /// Pointer position at drag start
    pub initial: Point,
    /// Selection origin at drag start
    pub original: Point,
    /// Latest pointer position
    pub last: Point,
}

impl MoveSession {
    pub fn new(point: Point, selection: &Selection) -> Self {
        Self {
            initial: point,
            original: selection.origin(),
            last: point,
        }
    }
}

/// Session data for a resize drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    pub direction: Direction,
    /// Anchor resolved at drag start
    pub anchor: Anchor,
    /// Pointer position at drag start
    pub initial: Point,
    /// Fixed point in normal mode (the anchored edge or corner)
    pub fixed_normal: Point,
    /// Fixed point in center mode (the selection centroid)
    pub fixed_center: Point,
    /// Locked aspect ratio in normalized units (width / height)
    pub aspect: Option<f64>,
    /// Latest pointer position
    pub last: Point,
}

impl ResizeSession {
    pub fn new(
        point: Point,
        selection: &Selection,
        anchor: Anchor,
        direction: Direction,
        aspect: Option<f64>,
    ) -> Self {
        let fraction = |a: Option<AxisAnchor>| a.map_or(0.5, AxisAnchor::fraction);
        let fixed_normal = Point::new(
            selection.x + selection.w * fraction(anchor.x),
            selection.y + selection.h * fraction(anchor.y),
        );

        Self {
            direction,
            anchor,
            initial: point,
            fixed_normal,
            fixed_center: selection.center(),
            aspect,
            last: point,
        }
    }

    /// Fixed point for the given mode.
    pub fn fixed_point(&self, mode: InteractionMode) -> Point {
        match mode {
            InteractionMode::Normal => self.fixed_normal,
            InteractionMode::Center => self.fixed_center,
        }
    }

    /// Anchor as seen from the live pointer.
    ///
    /// Flips once the pointer crosses the fixed point, so cursor hints
    /// follow a mirrored rectangle. Undriven axes stay free.
    pub fn live_anchor(&self, point: Point, mode: InteractionMode) -> Anchor {
        let fixed = self.fixed_point(mode);
        let axis_anchor = |axis: Axis| {
            if !self.direction.drives(axis) {
                return AxisAnchor::Free;
            }
            if point.along(axis) < fixed.along(axis) {
                AxisAnchor::End
            } else {
                AxisAnchor::Start
            }
        };

        Anchor::both(axis_anchor(Axis::Horizontal), axis_anchor(Axis::Vertical))
    }
}

/// Drag state for one editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No drag in progress
    #[default]
    Idle,

    /// Translating the selection
    Moving(MoveSession),

    /// Resizing the selection along one or both axes
    Resizing(ResizeSession),
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag session is active
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    /// Resize direction, if resizing
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Resizing(session) => Some(session.direction),
            _ => None,
        }
    }

    /// Latest pointer position of the active session
    pub fn last_point(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Moving(session) => Some(session.last),
            Self::Resizing(session) => Some(session.last),
        }
    }

    /// Record the latest pointer position
    pub fn set_last_point(&mut self, point: Point) {
        match self {
            Self::Idle => {}
            Self::Moving(session) => session.last = point,
            Self::Resizing(session) => session.last = point,
        }
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Moving(_) => "moving",
            Self::Resizing(_) => "resizing",
        }
    }

    /// Reset to Idle, dropping any session
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start a move drag
    pub fn start_moving(&mut self, point: Point, selection: &Selection) {
        *self = Self::Moving(MoveSession::new(point, selection));
    }

    /// Start a resize drag
    pub fn start_resizing(
        &mut self,
        point: Point,
        selection: &Selection,
        anchor: Anchor,
        direction: Direction,
        aspect: Option<f64>,
    ) {
        *self = Self::Resizing(ResizeSession::new(
            point, selection, anchor, direction, aspect,
        ));
    }
}
