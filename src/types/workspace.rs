use serde::{Deserialize, Serialize};

/// Width and height of a rectangle, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Insets kept free along each edge of the workspace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// The area tab bubbles live in, plus the size of a single bubble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceBounds {
    pub size: Size,
    pub margins: Margins,
    pub tab_size: Size,
}

impl WorkspaceBounds {
    pub fn center(&self) -> (f64, f64) {
        (self.size.width / 2.0, self.size.height / 2.0)
    }
}

impl Default for WorkspaceBounds {
    fn default() -> Self {
        Self {
            size: Size::new(1280.0, 800.0),
            margins: Margins::uniform(20.0),
            tab_size: Size::new(120.0, 120.0),
        }
    }
}
