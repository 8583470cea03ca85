//! Pointer down handling - drag start.
//!
//! A press inside the container either grabs the selection (move or resize,
//! depending on the band it lands in) or starts drawing a new one. Presses
//! outside the container are left to the host.

use super::events::{PointerEvent, PointerPhase};
use super::origin::{Anchor, AxisAnchor, resolve_origin};
use super::state::Direction;
use crate::editor::Editor;
use crate::hit_testing::HitTester;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::{Point, Selection};

impl<S: Surface> Editor<S> {
    /// Handle a pointer press. Returns true when the event was consumed.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("pointer_down");

        let Some(config) = self.interactive_config() else {
            return false;
        };
        let (margin, movable, resizable, persistent) = (
            config.margin,
            config.movable,
            config.resizable,
            config.persistent,
        );

        let Some(page) = event.page_point(PointerPhase::Start) else {
            return false;
        };

        // Extra presses while dragging (second touch, other button) are swallowed
        if self.state.is_dragging() {
            tracing::trace!(x = page.x, y = page.y, "Press ignored during drag");
            return true;
        }

        self.held = event.modifiers;
        let point = self.normalize(page);

        if !HitTester::hits_container(point) {
            return false;
        }

        if !HitTester::new(margin).hits_selection(point, self.selection.as_ref()) {
            if self.selection.is_some() && persistent {
                tracing::trace!(x = point.x, y = point.y, "Press outside persistent selection");
                return true;
            }
            if !resizable {
                tracing::debug!("Drawing rejected: resizing disabled");
                return true;
            }
            self.start_drawing(point);
            return true;
        }

        // A hit implies a selection
        let Some(selection) = self.selection else {
            return false;
        };
        let Some(anchor) = resolve_origin(point, Some(&selection), margin) else {
            return false;
        };

        if anchor.is_center() {
            if !movable {
                tracing::debug!("Move rejected: selection not movable");
                self.state.reset();
                return true;
            }
            self.state.start_moving(point, &selection);
        } else if let Some(direction) = Direction::from_anchor(&anchor) {
            if !resizable {
                tracing::debug!(?direction, "Resize rejected: selection not resizable");
                self.state.reset();
                return true;
            }
            let aspect = match direction {
                Direction::Both => self.aspect_lock(&selection),
                _ => None,
            };
            self.state
                .start_resizing(point, &selection, anchor, direction, aspect);
        } else {
            return false;
        }

        tracing::debug!(
            state = self.state.label(),
            direction = ?self.state.direction(),
            ?anchor,
            "Drag started"
        );
        self.emit_start();
        let cursor = self.drag_cursor(point);
        self.apply_cursor(cursor);
        true
    }

    /// Seed a zero-size selection at `point` and resize it on both axes.
    fn start_drawing(&mut self, point: Point) {
        let seed = Selection::at_point(point);
        let aspect = self.aspect_lock(&seed);

        self.commit(seed);
        self.state.start_resizing(
            point,
            &seed,
            Anchor::both(AxisAnchor::Start, AxisAnchor::Start),
            Direction::Both,
            aspect,
        );

        tracing::debug!(x = point.x, y = point.y, "Drawing new selection");
        self.emit_start();
        let cursor = self.drag_cursor(point);
        self.apply_cursor(cursor);
    }

    /// Normalized aspect ratio (w / h) to hold during a corner resize.
    ///
    /// The configured pixel ratio takes precedence; otherwise shift locks
    /// the selection's own pixel ratio. Empty selections cannot be locked.
    fn aspect_lock(&self, selection: &Selection) -> Option<f64> {
        let config = self.config.as_ref()?;

        let pixel_ratio = match config.aspect_ratio {
            Some(ratio) => ratio,
            None if self.held.shift => {
                let rect = CoordinateConverter::normalized_to_pixel(selection, config);
                if rect.w == 0 || rect.h == 0 {
                    return None;
                }
                f64::from(rect.w) / f64::from(rect.h)
            }
            None => return None,
        };

        Some(pixel_ratio * config.real.h / config.real.w)
    }
}
