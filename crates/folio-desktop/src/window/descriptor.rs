//! Window descriptor for open requests

use crate::math::{Point, Size};
use super::WindowId;

/// Request to open (or bring back) a window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowDescriptor<P> {
    /// Window id; reopening an existing id refocuses it
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Content renderer key
    pub component_key: String,
    /// Initial size (None = default size)
    pub size: Option<Size>,
    /// Initial position (None = cascade)
    pub position: Option<Point>,
    /// Associated content; replaces the stored payload on reopen
    pub payload: Option<P>,
}

impl<P> WindowDescriptor<P> {
    /// Descriptor with no size, position or payload
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        component_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            component_key: component_key.into(),
            size: None,
            position: None,
            payload: None,
        }
    }

    /// Set the initial size
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Set the initial position
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some(Point::new(x, y));
        self
    }

    /// Attach a payload
    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }
}
