//! Unit tests for the layout strategies.

use std::f64::consts::PI;

use tabspace::services::classifier::Classifier;
use tabspace::services::layout::{
    category_clusters, circle, compute_layout, grid, grid_columns, grid_spacing_x, spiral,
    GRID_MAX_CELL_WIDTH, GRID_ROW_HEIGHT, GRID_START_X, GRID_START_Y,
};
use tabspace::types::tab::{Position, Tab, TabMetadata};
use tabspace::types::view::LayoutStrategy;
use tabspace::types::workspace::{Margins, Size, WorkspaceBounds};

fn tab(id: &str, url: &str) -> Tab {
    Tab {
        id: id.to_string(),
        url: url.to_string(),
        title: String::new(),
        created_at: 0,
        position: Position::default(),
        metadata: TabMetadata::new(),
    }
}

fn tabs(n: usize) -> Vec<Tab> {
    (0..n).map(|i| tab(&format!("t{i}"), "https://example.org")).collect()
}

fn bounds(width: f64, height: f64) -> WorkspaceBounds {
    WorkspaceBounds {
        size: Size::new(width, height),
        margins: Margins::uniform(0.0),
        tab_size: Size::new(100.0, 100.0),
    }
}

fn close(a: Position, b: Position) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_grid_of_four_uses_two_columns() {
    let b = bounds(1280.0, 800.0);
    let placements = grid(&tabs(4), &b);
    let sx = grid_spacing_x(&b, 2);
    let sy = GRID_ROW_HEIGHT;
    let expected = [
        Position::new(GRID_START_X, GRID_START_Y),
        Position::new(GRID_START_X + sx, GRID_START_Y),
        Position::new(GRID_START_X, GRID_START_Y + sy),
        Position::new(GRID_START_X + sx, GRID_START_Y + sy),
    ];
    assert_eq!(grid_columns(4), 2);
    for (p, e) in placements.iter().zip(expected.iter()) {
        assert!(close(p.position, *e), "{:?} != {:?}", p.position, e);
    }
}

#[test]
fn test_grid_spacing_is_capped_and_non_negative() {
    assert_eq!(grid_spacing_x(&bounds(5000.0, 800.0), 2), GRID_MAX_CELL_WIDTH);
    assert_eq!(grid_spacing_x(&bounds(600.0, 800.0), 2), 200.0);
    assert_eq!(grid_spacing_x(&bounds(100.0, 800.0), 3), 0.0);
}

#[test]
fn test_grid_columns() {
    assert_eq!(grid_columns(0), 1);
    assert_eq!(grid_columns(1), 1);
    assert_eq!(grid_columns(5), 3);
    assert_eq!(grid_columns(9), 3);
    assert_eq!(grid_columns(10), 4);
}

#[test]
fn test_circle_places_on_radius_around_center() {
    let b = bounds(1000.0, 600.0);
    let placements = circle(&tabs(4), &b);
    let radius = 0.6 * 300.0;
    assert!(close(placements[0].position, Position::new(500.0 + radius, 300.0)));
    assert!(close(placements[1].position, Position::new(500.0, 300.0 + radius)));
    for p in &placements {
        let d = ((p.position.x - 500.0).powi(2) + (p.position.y - 300.0).powi(2)).sqrt();
        assert!((d - radius).abs() < 1e-9);
    }
}

#[test]
fn test_spiral_radius_grows() {
    let b = bounds(1000.0, 600.0);
    let placements = spiral(&tabs(3), &b);
    assert!(close(placements[0].position, Position::new(580.0, 300.0)));
    let r1 = 95.0;
    let expected = Position::new(500.0 + r1 * 0.5f64.cos(), 300.0 + r1 * 0.5f64.sin());
    assert!(close(placements[1].position, expected));
}

#[test]
fn test_category_clusters_ring_each_category() {
    let b = bounds(1000.0, 600.0);
    let input = vec![
        tab("gh", "https://github.com"),
        tab("yt", "https://youtube.com"),
        tab("gl", "https://gitlab.com"),
    ];
    let placements = category_clusters(&input, &b, &Classifier::default());
    let order: Vec<&str> = placements.iter().map(|p| p.tab_id.as_str()).collect();
    assert_eq!(order, vec!["gh", "yt", "gl"]);

    // Work cluster sits at angle 0 on the main circle, two members, sub-radius 70.
    let main_radius = 0.6 * 300.0;
    let (gx, gy) = (500.0 + main_radius, 300.0);
    assert!(close(placements[0].position, Position::new(gx + 70.0, gy)));
    assert!(close(placements[2].position, Position::new(gx + 70.0 * PI.cos(), gy + 70.0 * PI.sin())));

    // Entertainment cluster at angle pi, single member at sub-radius 65.
    let (ex, ey) = (500.0 + main_radius * PI.cos(), 300.0 + main_radius * PI.sin());
    assert!(close(placements[1].position, Position::new(ex + 65.0, ey)));
}

#[test]
fn test_all_strategies_handle_empty_and_single() {
    let b = bounds(800.0, 600.0);
    let classifier = Classifier::default();
    for strategy in [
        LayoutStrategy::Grid,
        LayoutStrategy::Circle,
        LayoutStrategy::Spiral,
        LayoutStrategy::CategoryClusters,
    ] {
        assert!(compute_layout(strategy, &[], &b, &classifier).is_empty());

        let one = compute_layout(strategy, &tabs(1), &b, &classifier);
        assert_eq!(one.len(), 1);
        assert!(one[0].position.x.is_finite() && one[0].position.y.is_finite());
        assert_eq!(one, compute_layout(strategy, &tabs(1), &b, &classifier));
    }
}
