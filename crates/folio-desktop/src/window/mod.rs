//! Window store module
//!
//! Provides the window registry, cascade placement, focus and z-order.

mod descriptor;
mod placement;
mod record;
mod store;

pub use descriptor::WindowDescriptor;
pub use placement::{CascadePolicy, DEFAULT_WINDOW_SIZE};
pub use record::WindowRecord;
pub use store::WindowStore;

/// Unique window identifier (an app id, or composite like `project-<id>`)
pub type WindowId = String;
