//! 2D point type for window positions and offsets

use serde::{Deserialize, Serialize};

/// Top-left corner of a window, in layout pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta on both axes, saturating at the `i32` bounds
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        self.offset(other.x, other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(10, 20);
        let b = Point::new(3, 4);

        assert_eq!(a + b, Point::new(13, 24));
        assert_eq!(a - b, Point::new(7, 16));
        assert_eq!(a.offset(30, 30), Point::new(40, 50));
    }

    #[test]
    fn test_point_arithmetic_saturates() {
        let far = Point::new(i32::MAX - 10, i32::MIN + 5);

        assert_eq!(far + Point::new(30, -30), Point::new(i32::MAX, i32::MIN));
        assert_eq!(far.offset(30, 30), Point::new(i32::MAX, i32::MIN + 35));
        assert_eq!(far - Point::new(-30, 30), Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_point_serialization() {
        let p = Point::new(-5, 120);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":-5,"y":120}"#);
    }
}
