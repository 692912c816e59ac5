//! Window store for lifecycle, focus, and z-order

use crate::math::{Point, Rect, Size};
use crate::viewport::Viewport;
use super::{CascadePolicy, WindowDescriptor, WindowId, WindowRecord, DEFAULT_WINDOW_SIZE};

/// Z-index given to the first window of an empty store
const BASE_Z_INDEX: i32 = 1;

/// Registry of open windows plus the single active-window pointer.
///
/// Every operation is a complete transition: callers never observe a
/// half-updated z-order. Unknown ids are silent no-ops.
#[derive(Clone, Debug)]
pub struct WindowStore<P = serde_json::Value> {
    /// Open windows in insertion order
    pub(crate) windows: Vec<WindowRecord<P>>,
    /// Focused window, if any
    pub(crate) active: Option<WindowId>,
    /// Current browser viewport
    pub(crate) viewport: Viewport,
    /// Placement for new windows
    pub(crate) cascade: CascadePolicy,
}

impl<P> Default for WindowStore<P> {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl<P> WindowStore<P> {
    /// Create an empty store laid out in `viewport`
    pub fn new(viewport: Viewport) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            viewport,
            cascade: CascadePolicy::default(),
        }
    }

    /// Replace the cascade placement policy
    pub fn with_cascade(mut self, cascade: CascadePolicy) -> Self {
        self.cascade = cascade;
        self
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new viewport (e.g. browser resize).
    ///
    /// Only future opens and the maximized layout see the change; stored
    /// window geometry is left alone.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Area windows may occupy
    pub fn work_area(&self) -> Rect {
        self.viewport.work_area()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open a window, or bring an already open one back to the front.
    ///
    /// Returns `true` when a new record was inserted.
    pub fn open(&mut self, descriptor: WindowDescriptor<P>) -> bool {
        let z_index = self.next_z_index();

        if let Some(window) = self.find_mut(&descriptor.id) {
            window.is_minimized = false;
            window.z_index = z_index;
            if descriptor.payload.is_some() {
                window.payload = descriptor.payload;
            }
            self.active = Some(descriptor.id);
            return false;
        }

        let work_area = self.work_area();
        let previous = self.windows.last().map(|w| w.position);
        let rect = self.cascade.place(
            &work_area,
            previous,
            descriptor.position,
            descriptor
                .size
                .filter(|size| !size.is_empty())
                .unwrap_or(DEFAULT_WINDOW_SIZE),
        );

        self.active = Some(descriptor.id.clone());
        self.windows.push(WindowRecord {
            id: descriptor.id,
            title: descriptor.title,
            component_key: descriptor.component_key,
            position: rect.position(),
            size: rect.size(),
            z_index,
            is_minimized: false,
            is_maximized: false,
            payload: descriptor.payload,
        });
        true
    }

    /// Close a window.
    ///
    /// When the closed window was active, focus passes to the topmost
    /// remaining visible window.
    pub fn close(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.windows.remove(index);

        if self.active.as_deref() == Some(id) {
            self.active = self.topmost_visible().map(|w| w.id.clone());
        }
    }

    /// Minimize a window; an active window loses focus
    pub fn minimize(&mut self, id: &str) {
        let Some(window) = self.find_mut(id) else {
            return;
        };
        window.is_minimized = true;

        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
    }

    /// Flip the maximized overlay. Stored position and size are untouched.
    pub fn toggle_maximize(&mut self, id: &str) {
        if let Some(window) = self.find_mut(id) {
            window.is_maximized = !window.is_maximized;
        }
    }

    /// Focus a window (restores it and brings it to top).
    ///
    /// Unknown ids leave the active pointer unchanged.
    pub fn focus(&mut self, id: &str) {
        let z_index = self.next_z_index();
        let Some(window) = self.find_mut(id) else {
            return;
        };
        window.is_minimized = false;
        window.z_index = z_index;
        self.active = Some(id.to_string());
    }

    /// Move a window. No clamping is applied.
    pub fn update_position(&mut self, id: &str, position: Point) {
        if let Some(window) = self.find_mut(id) {
            window.position = position;
        }
    }

    /// Resize a window. No clamping is applied.
    pub fn update_size(&mut self, id: &str, size: Size) {
        if let Some(window) = self.find_mut(id) {
            window.size = size;
        }
    }

    /// Renumber z-indices to `1..=n`, keeping the front-to-back order
    pub fn compact_z_order(&mut self) {
        let mut order: Vec<usize> = (0..self.windows.len()).collect();
        order.sort_by_key(|&i| self.windows[i].z_index);

        for (rank, index) in order.into_iter().enumerate() {
            self.windows[index].z_index = BASE_Z_INDEX + rank as i32;
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&WindowRecord<P>> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Check whether a window is open
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Id of the focused window
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The focused window
    pub fn active_window(&self) -> Option<&WindowRecord<P>> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// All windows in the order they were opened
    pub fn records(&self) -> impl Iterator<Item = &WindowRecord<P>> {
        self.windows.iter()
    }

    /// Windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&WindowRecord<P>> {
        let mut windows: Vec<&WindowRecord<P>> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Non-minimized windows sorted back to front
    pub fn visible_windows(&self) -> Vec<&WindowRecord<P>> {
        let mut windows = self.windows_by_z();
        windows.retain(|w| w.is_visible());
        windows
    }

    /// Rect the rendering layer should paint for a window.
    ///
    /// Maximized windows fill the work area; minimized or unknown windows
    /// have no layout.
    pub fn layout_rect(&self, id: &str) -> Option<Rect> {
        let window = self.get(id)?;
        if window.is_minimized {
            None
        } else if window.is_maximized {
            Some(self.work_area())
        } else {
            Some(window.rect())
        }
    }

    /// Highest z-index currently assigned
    pub fn max_z_index(&self) -> Option<i32> {
        self.windows.iter().map(|w| w.z_index).max()
    }

    /// Get the number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Check if no windows are open
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Z-index that puts a window above every other one
    fn next_z_index(&self) -> i32 {
        self.max_z_index().map_or(BASE_Z_INDEX, |z| z + 1)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut WindowRecord<P>> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn topmost_visible(&self) -> Option<&WindowRecord<P>> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }
}
