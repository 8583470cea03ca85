//! Host-agnostic input events.
//!
//! The host translates its native mouse/touch/keyboard events into these
//! types. Touch handling is limited to picking the point that drives the drag.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Toggles center-resize mode
    pub alt: bool,
    /// Locks the aspect ratio of a corner resize
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        shift: false,
    };
    pub const ALT: Modifiers = Modifiers {
        alt: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        alt: false,
        shift: true,
    };
}

/// Where in the drag lifecycle an event sits. Decides which touch list to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// The device an event came from, with page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSource {
    Mouse {
        page: Point,
    },
    Touch {
        /// Touches currently on the surface
        touches: Vec<Point>,
        /// Touches that changed in this event (the lifted one on end)
        changed: Vec<Point>,
    },
}

/// A pointer event in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse {
                page: Point::new(x, y),
            },
            modifiers: Modifiers::NONE,
        }
    }

    pub fn touch(touches: Vec<Point>, changed: Vec<Point>) -> Self {
        Self {
            source: PointerSource::Touch { touches, changed },
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The page point driving this event.
    ///
    /// Touch start/move read the first active touch; touch end reads the first
    /// changed touch, since the lifted finger is no longer active.
    pub fn page_point(&self, phase: PointerPhase) -> Option<Point> {
        match &self.source {
            PointerSource::Mouse { page } => Some(*page),
            PointerSource::Touch { touches, changed } => match phase {
                PointerPhase::Start | PointerPhase::Move => touches.first().copied(),
                PointerPhase::End => changed.first().copied(),
            },
        }
    }
}

/// Keys the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Alt,
    Shift,
    Other,
}

/// Interaction mode, derived fresh from the held modifiers on every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// The opposite edge or corner stays fixed
    #[default]
    Normal,
    /// The selection center stays fixed
    Center,
}

impl InteractionMode {
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.alt {
            InteractionMode::Center
        } else {
            InteractionMode::Normal
        }
    }
}
