//! Hit testing against the selection and the container.
//!
//! Both tests work in normalized container coordinates. Boundaries are
//! inclusive: a point exactly `margin` outside an edge still hits.

use crate::types::{Point, Selection};

/// Hit tester bound to a margin tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTester {
    pub margin: f64,
}

impl HitTester {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// True if `point` lies in the margin-expanded selection box.
    /// Always false when there is no selection.
    pub fn hits_selection(&self, point: Point, selection: Option<&Selection>) -> bool {
        let Some(sel) = selection else {
            return false;
        };
        let m = self.margin;

        if point.y < sel.y - m || point.y > sel.y + sel.h + m {
            return false;
        }

        if point.x < sel.x - m || point.x > sel.x + sel.w + m {
            return false;
        }

        true
    }

    /// True if both coordinates lie in `0..=1`.
    #[inline]
    pub fn hits_container(point: Point) -> bool {
        (0.0..=1.0).contains(&point.x) && (0.0..=1.0).contains(&point.y)
    }
}
