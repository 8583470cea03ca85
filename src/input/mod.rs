//! Pointer and keyboard input handling for the selection editor.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current drag. Pure geometry (coordinate conversion, origin
//! resolution, selection updates) is kept apart from the event handlers,
//! which are `impl Editor` blocks that glue the two together.
//!
//! ## Modules
//!
//! - `coords` - Page, normalized and pixel coordinate conversion
//! - `events` - Host-agnostic pointer/key events and modifiers
//! - `origin` - Which edge, corner or body a point targets
//! - `state` - Drag state machine and drag sessions
//! - `update` - Selection recomputation for move and resize
//! - `mouse_down` - Drag start
//! - `drag` - Pointer move (drag update, hover cursor)
//! - `mouse_up` - Drag end
//! - `keyboard` - Modifier keys

pub mod coords;
pub mod events;
pub mod origin;
pub mod state;
pub mod update;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;

pub use coords::{CoordinateContext, CoordinateConverter};
pub use events::{InteractionMode, Key, Modifiers, PointerEvent, PointerPhase, PointerSource};
pub use origin::{Anchor, AxisAnchor, resolve_origin};
pub use state::{Direction, InteractionState, MoveSession, ResizeSession};
pub use update::{AxisLimits, resize_axis, update_selection};
