//! Window store for the Folio portfolio desktop
//!
//! This crate holds the one stateful piece of the desktop: the registry of
//! open application windows that the window and dock layers render.
//!
//! - Window lifecycle (open, close, minimize, maximize)
//! - Focus and z-order
//! - Cascade placement clamped to the space between menu bar and dock
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry types (`Point`, `Size`, `Rect`)
//! - [`window`]: Window records, descriptors, placement and the store itself
//! - [`invariants`]: Runtime-checkable store invariants
//! - [`snapshot`]: Serializable view for the rendering layer
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{Viewport, WindowDescriptor, WindowStore};
//!
//! let mut store: WindowStore = WindowStore::new(Viewport::new(1200, 800));
//! store.open(WindowDescriptor::new("terminal", "Terminal", "terminal").with_size(820, 520));
//!
//! assert_eq!(store.active(), Some("terminal"));
//! assert!(store.work_area().contains_rect(&store.get("terminal").unwrap().rect()));
//! ```
//!
//! The store is an ordinary value: construct one per session and pass it
//! by reference. Nothing here is global.

pub mod invariants;
pub mod math;
pub mod snapshot;
pub mod window;

mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use invariants::{check_all_invariants, InvariantViolation};
pub use math::{Point, Rect, Size};
pub use snapshot::{StoreSnapshot, WindowView};
pub use viewport::{Chrome, Viewport, DOCK_HEIGHT, MENU_BAR_HEIGHT};
pub use window::{
    CascadePolicy, WindowDescriptor, WindowId, WindowRecord, WindowStore, DEFAULT_WINDOW_SIZE,
};
