//! 2D size type for dimensions

use serde::{Deserialize, Serialize};

/// Width and height of a window, in layout pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Shrink each dimension to at most `max`, never below zero
    #[inline]
    pub fn fit_within(self, max: Size) -> Self {
        Self::new(
            self.width.min(max.width).max(0),
            self.height.min(max.height).max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(Size::new(-1, 10).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn test_size_fit_within() {
        let s = Size::new(1400, 500);
        let fitted = s.fit_within(Size::new(1200, 696));
        assert_eq!(fitted, Size::new(1200, 500));
    }

    #[test]
    fn test_size_fit_within_negative_bound() {
        let fitted = Size::new(800, 600).fit_within(Size::new(-10, 300));
        assert_eq!(fitted, Size::new(0, 300));
    }
}
