//! Cascade placement for newly opened windows

use crate::math::{Point, Rect, Size};

/// Size used when an open request carries none
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(800, 600);

/// Cascade placement policy
///
/// Each new window is offset from the previously opened one by `step`.
/// When the offset window would run past the right or bottom edge of the
/// work area, placement starts over at the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadePolicy {
    /// Offset from the previous window
    pub step: Point,
    /// Base position, relative to the work area origin
    pub anchor: Point,
}

impl Default for CascadePolicy {
    fn default() -> Self {
        Self {
            step: Point::new(30, 30),
            anchor: Point::new(80, 40),
        }
    }
}

impl CascadePolicy {
    /// Absolute anchor position inside `work_area`
    #[inline]
    pub fn anchor_in(&self, work_area: &Rect) -> Point {
        work_area.position() + self.anchor
    }

    /// Pick the initial rect for a new window.
    ///
    /// An explicit `requested` position wins over the cascade. The result is
    /// always clamped fully inside `work_area`.
    pub fn place(
        &self,
        work_area: &Rect,
        previous: Option<Point>,
        requested: Option<Point>,
        size: Size,
    ) -> Rect {
        let position = match requested {
            Some(pos) => pos,
            None => self.cascade_from(work_area, previous, size),
        };
        work_area.clamp_inside(position, size)
    }

    fn cascade_from(&self, work_area: &Rect, previous: Option<Point>, size: Size) -> Point {
        let anchor = self.anchor_in(work_area);
        let Some(prev) = previous else {
            return anchor;
        };

        let next = prev + self.step;
        let overflows = next.x.saturating_add(size.width) > work_area.right()
            || next.y.saturating_add(size.height) > work_area.bottom();
        if overflows {
            anchor
        } else {
            next
        }
    }
}
