//! Geometry clamp for tab bubbles.
//!
//! Keeps a bubble of a given size fully inside the workspace, minus margins.

use crate::types::tab::Position;
use crate::types::workspace::{Margins, Size, WorkspaceBounds};

/// Bounds `(x, y)` so an element of size `element` stays inside `workspace`.
///
/// `x' = max(left, min(x, width - element.width - right))`, and the same for `y`
/// with top/bottom. When the workspace is too small to fit the element the
/// lower margin wins. Non-finite input collapses onto one of the bounds.
pub fn clamp(x: f64, y: f64, element: Size, workspace: Size, margins: Margins) -> Position {
    Position {
        x: clamp_axis(x, margins.left, workspace.width - element.width - margins.right),
        y: clamp_axis(y, margins.top, workspace.height - element.height - margins.bottom),
    }
}

/// Clamps against a full [`WorkspaceBounds`].
pub fn clamp_to_bounds(x: f64, y: f64, bounds: &WorkspaceBounds) -> Position {
    clamp(x, y, bounds.tab_size, bounds.size, bounds.margins)
}

/// True if `position` already sits inside the clamped range for `bounds`.
pub fn is_within(position: Position, bounds: &WorkspaceBounds) -> bool {
    clamp_to_bounds(position.x, position.y, bounds) == position
}

fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    // NaN fails every comparison below, so the checks are written to fall through to a bound.
    if !(high >= low) {
        return low;
    }
    if value.is_nan() || value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
