//! WASM exports for the window store
//!
//! This module provides wasm-bindgen exports for the WindowStore,
//! allowing the React window and dock layers to drive it directly.

use wasm_bindgen::prelude::*;

use crate::math::{Point, Size};
use crate::viewport::Viewport;
use crate::window::{WindowDescriptor, WindowStore};

/// Desktop controller for WASM - wraps WindowStore with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    store: WindowStore<serde_json::Value>,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller for a screen of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            store: WindowStore::new(Viewport::new(width, height)),
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Record a browser resize
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        let chrome = self.store.viewport().chrome;
        self.store
            .set_viewport(Viewport::new(width, height).with_chrome(chrome));
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window or bring it to front.
    ///
    /// `payload_json` must be valid JSON when given. Returns `true` when a
    /// new window was created.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn open_window(
        &mut self,
        id: &str,
        title: &str,
        component_key: &str,
        width: Option<i32>,
        height: Option<i32>,
        x: Option<i32>,
        y: Option<i32>,
        payload_json: Option<String>,
    ) -> Result<bool, JsValue> {
        let payload = payload_json
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(|e| JsValue::from_str(&format!("invalid payload: {e}")))?;

        let descriptor = WindowDescriptor {
            id: id.to_string(),
            title: title.to_string(),
            component_key: component_key.to_string(),
            size: width.zip(height).map(|(w, h)| Size::new(w, h)),
            position: x.zip(y).map(|(x, y)| Point::new(x, y)),
            payload,
        };
        let created = self.store.open(descriptor);
        self.debug_check();
        Ok(created)
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) {
        self.store.close(id);
        self.debug_check();
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) {
        self.store.minimize(id);
        self.debug_check();
    }

    /// Toggle the maximized overlay
    #[wasm_bindgen]
    pub fn toggle_maximize_window(&mut self, id: &str) {
        self.store.toggle_maximize(id);
        self.debug_check();
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) {
        self.store.focus(id);
        self.debug_check();
    }

    /// Move a window
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: i32, y: i32) {
        self.store.update_position(id, Point::new(x, y));
        self.debug_check();
    }

    /// Resize a window
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: &str, width: i32, height: i32) {
        self.store.update_size(id, Size::new(width, height));
        self.debug_check();
    }

    /// Get the focused window id
    #[wasm_bindgen]
    pub fn get_active_window(&self) -> Option<String> {
        self.store.active().map(str::to_string)
    }

    /// Get the full store snapshot as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.store.snapshot())
            .unwrap_or_else(|_| r#"{"active":null,"windows":[]}"#.to_string())
    }

    fn debug_check(&self) {
        debug_assert!(
            self.store.check_invariants().is_empty(),
            "window store invariants violated: {:?}",
            self.store.check_invariants()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mutator_keeps_invariants() {
        let mut desktop = DesktopController::new(1200, 800);
        assert!(desktop
            .open_window("finder", "Finder", "finder", None, None, None, None, None)
            .unwrap());
        assert!(desktop
            .open_window("terminal", "Terminal", "terminal", Some(820), Some(520), None, None, None)
            .unwrap());

        desktop.toggle_maximize_window("finder");
        desktop.move_window("terminal", i32::MAX - 10, -500);
        desktop.resize_window("terminal", -20, 0);
        desktop.focus_window("finder");
        desktop.minimize_window("finder");
        desktop.close_window("terminal");
        desktop.resize(640, 480);

        assert!(desktop.store.check_invariants().is_empty());
        assert_eq!(desktop.get_active_window(), None);

        let json: serde_json::Value = serde_json::from_str(&desktop.get_windows_json()).unwrap();
        assert_eq!(json["windows"][0]["isMaximized"], true);
        assert_eq!(json["windows"][0]["isMinimized"], true);
    }
}
