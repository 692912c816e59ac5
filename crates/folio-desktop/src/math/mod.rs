//! Core geometry types for the desktop layout
//!
//! All coordinates are integer layout pixels, matching what the rendering
//! layer writes into CSS.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
