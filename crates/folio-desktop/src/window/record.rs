//! Window record and its derived geometry

use crate::math::{Point, Rect, Size};
use super::WindowId;

/// One open application window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowRecord<P> {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Content renderer key, resolved by the rendering layer
    pub component_key: String,
    /// Top-left corner in layout pixels
    pub position: Point,
    /// Size in layout pixels
    pub size: Size,
    /// Paint order (higher = on top)
    pub z_index: i32,
    /// Hidden in the dock, state preserved
    pub is_minimized: bool,
    /// Fills the work area at render time
    pub is_maximized: bool,
    /// Content passed through untouched
    pub payload: Option<P>,
}

impl<P> WindowRecord<P> {
    /// Stored bounding rectangle, ignoring the maximized overlay
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Whether the window takes part in layout and paint
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }
}
