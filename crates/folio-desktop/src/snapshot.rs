//! Serializable view of the store for the rendering and dock layers

use serde::Serialize;
use crate::math::{Point, Rect, Size};
use crate::window::{WindowId, WindowRecord, WindowStore};

/// One window as the rendering layer sees it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView<P> {
    pub id: WindowId,
    pub title: String,
    pub component_key: String,
    pub position: Point,
    pub size: Size,
    pub z_index: i32,
    pub is_minimized: bool,
    pub is_maximized: bool,
    /// Rect to paint (work area when maximized, none when minimized)
    pub layout: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

/// Point-in-time copy of the whole store
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot<P> {
    /// Focused window id
    pub active: Option<WindowId>,
    /// Work area windows are laid out in
    pub work_area: Rect,
    /// Windows in the order they were opened
    pub windows: Vec<WindowView<P>>,
}

impl<P: Clone> WindowStore<P> {
    /// Take a snapshot for the rendering layer
    pub fn snapshot(&self) -> StoreSnapshot<P> {
        StoreSnapshot {
            active: self.active.clone(),
            work_area: self.work_area(),
            windows: self.windows.iter().map(|w| self.view_of(w)).collect(),
        }
    }

    fn view_of(&self, window: &WindowRecord<P>) -> WindowView<P> {
        WindowView {
            id: window.id.clone(),
            title: window.title.clone(),
            component_key: window.component_key.clone(),
            position: window.position,
            size: window.size,
            z_index: window.z_index,
            is_minimized: window.is_minimized,
            is_maximized: window.is_maximized,
            layout: self.layout_rect(&window.id),
            payload: window.payload.clone(),
        }
    }
}
