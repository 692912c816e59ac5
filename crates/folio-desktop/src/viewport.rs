//! Viewport and fixed desktop chrome

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size};

/// Height of the top menu bar in layout pixels
pub const MENU_BAR_HEIGHT: i32 = 24;

/// Height reserved for the bottom dock in layout pixels
pub const DOCK_HEIGHT: i32 = 80;

/// Fixed chrome that windows must never cover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
    /// Space reserved at the top of the screen
    pub menu_bar_height: i32,
    /// Space reserved at the bottom of the screen
    pub dock_height: i32,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            menu_bar_height: MENU_BAR_HEIGHT,
            dock_height: DOCK_HEIGHT,
        }
    }
}

/// Browser viewport the desktop is laid out in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen size in layout pixels
    pub screen_size: Size,
    /// Reserved chrome
    pub chrome: Chrome,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl Viewport {
    /// Create a viewport with the default menu bar and dock
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen_size: Size::new(width, height),
            chrome: Chrome::default(),
        }
    }

    /// Replace the reserved chrome
    pub fn with_chrome(mut self, chrome: Chrome) -> Self {
        self.chrome = chrome;
        self
    }

    /// Area windows may occupy: the screen minus menu bar and dock
    pub fn work_area(&self) -> Rect {
        let top = self.chrome.menu_bar_height.max(0);
        let height = self
            .screen_size
            .height
            .saturating_sub(top)
            .saturating_sub(self.chrome.dock_height.max(0));
        Rect::new(0, top, self.screen_size.width.max(0), height.max(0))
    }
}
