//! Layout strategies for arranging every tab at once.
//!
//! Each strategy only computes target positions. Applying them goes through
//! the tab store's `move_tab`, which clamps to the workspace.

use std::f64::consts::PI;

use crate::services::classifier::Classifier;
use crate::services::view_projector::group_by_category;
use crate::types::tab::{Position, Tab};
use crate::types::view::{LayoutStrategy, Placement};
use crate::types::workspace::WorkspaceBounds;

pub const GRID_START_X: f64 = 100.0;
pub const GRID_START_Y: f64 = 100.0;
pub const GRID_MAX_CELL_WIDTH: f64 = 250.0;
pub const GRID_ROW_HEIGHT: f64 = 180.0;

/// Fraction of `min(center_x, center_y)` used as the radius of the main circle.
pub const CIRCLE_RADIUS_FACTOR: f64 = 0.6;

pub const SPIRAL_ANGLE_STEP: f64 = 0.5;
pub const SPIRAL_BASE_RADIUS: f64 = 80.0;
pub const SPIRAL_RADIUS_STEP: f64 = 15.0;

pub const CLUSTER_BASE_RADIUS: f64 = 60.0;
pub const CLUSTER_RADIUS_PER_TAB: f64 = 5.0;

/// Runs the given strategy.
pub fn compute_layout(
    strategy: LayoutStrategy,
    tabs: &[Tab],
    bounds: &WorkspaceBounds,
    classifier: &Classifier,
) -> Vec<Placement> {
    match strategy {
        LayoutStrategy::Grid => grid(tabs, bounds),
        LayoutStrategy::Circle => circle(tabs, bounds),
        LayoutStrategy::Spiral => spiral(tabs, bounds),
        LayoutStrategy::CategoryClusters => category_clusters(tabs, bounds, classifier),
    }
}

/// Column count for `n` tabs: `ceil(sqrt(n))`, at least one.
pub fn grid_columns(n: usize) -> usize {
    ((n as f64).sqrt().ceil() as usize).max(1)
}

/// Horizontal distance between grid cells for the given bounds and columns.
pub fn grid_spacing_x(bounds: &WorkspaceBounds, cols: usize) -> f64 {
    let available = bounds.size.width - 2.0 * GRID_START_X;
    (available / cols as f64).clamp(0.0, GRID_MAX_CELL_WIDTH)
}

pub fn grid(tabs: &[Tab], bounds: &WorkspaceBounds) -> Vec<Placement> {
    let cols = grid_columns(tabs.len());
    let spacing_x = grid_spacing_x(bounds, cols);
    tabs.iter()
        .enumerate()
        .map(|(i, tab)| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            place(
                tab,
                GRID_START_X + col * spacing_x,
                GRID_START_Y + row * GRID_ROW_HEIGHT,
            )
        })
        .collect()
}

pub fn circle(tabs: &[Tab], bounds: &WorkspaceBounds) -> Vec<Placement> {
    let (cx, cy) = bounds.center();
    let radius = CIRCLE_RADIUS_FACTOR * cx.min(cy);
    let n = tabs.len() as f64;
    tabs.iter()
        .enumerate()
        .map(|(i, tab)| {
            let angle = 2.0 * PI * i as f64 / n;
            place(tab, cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

pub fn spiral(tabs: &[Tab], bounds: &WorkspaceBounds) -> Vec<Placement> {
    let (cx, cy) = bounds.center();
    tabs.iter()
        .enumerate()
        .map(|(i, tab)| {
            let i = i as f64;
            let angle = i * SPIRAL_ANGLE_STEP;
            let radius = SPIRAL_BASE_RADIUS + i * SPIRAL_RADIUS_STEP;
            place(tab, cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Category centers sit on the main circle; each category's tabs ring their center.
pub fn category_clusters(
    tabs: &[Tab],
    bounds: &WorkspaceBounds,
    classifier: &Classifier,
) -> Vec<Placement> {
    let groups = group_by_category(tabs, classifier);
    let (cx, cy) = bounds.center();
    let radius = CIRCLE_RADIUS_FACTOR * cx.min(cy);
    let group_count = groups.len() as f64;

    let mut placements = Vec::with_capacity(tabs.len());
    for (j, group) in groups.iter().enumerate() {
        let group_angle = 2.0 * PI * j as f64 / group_count;
        let gx = cx + radius * group_angle.cos();
        let gy = cy + radius * group_angle.sin();

        let size = group.tab_ids.len() as f64;
        let sub_radius = CLUSTER_BASE_RADIUS + CLUSTER_RADIUS_PER_TAB * size;
        for (i, tab_id) in group.tab_ids.iter().enumerate() {
            let angle = 2.0 * PI * i as f64 / size;
            placements.push(Placement {
                tab_id: tab_id.clone(),
                position: Position::new(gx + sub_radius * angle.cos(), gy + sub_radius * angle.sin()),
            });
        }
    }

    // Keep the output in store order like the other strategies.
    placements.sort_by_key(|p| tabs.iter().position(|t| t.id == p.tab_id));
    placements
}

fn place(tab: &Tab, x: f64, y: f64) -> Placement {
    Placement {
        tab_id: tab.id.clone(),
        position: Position::new(x, y),
    }
}
