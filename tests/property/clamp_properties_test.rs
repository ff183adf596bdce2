//! Property-based tests for the geometry clamp.
//!
//! Clamped positions always lie inside the usable area, clamping is
//! idempotent, and positions already inside are left alone.

use proptest::prelude::*;
use tabspace::services::geometry::{clamp, clamp_to_bounds, is_within};
use tabspace::types::workspace::{Margins, Size, WorkspaceBounds};

fn arb_bounds() -> impl Strategy<Value = WorkspaceBounds> {
    (
        400.0..3000.0f64,
        300.0..2000.0f64,
        0.0..40.0f64,
        40.0..200.0f64,
        40.0..200.0f64,
    )
        .prop_map(|(w, h, margin, tw, th)| WorkspaceBounds {
            size: Size::new(w, h),
            margins: Margins::uniform(margin),
            tab_size: Size::new(tw, th),
        })
}

fn arb_coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -5000.0..5000.0f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn clamped_position_is_inside(bounds in arb_bounds(), x in arb_coord(), y in arb_coord()) {
        let p = clamp_to_bounds(x, y, &bounds);
        let max_x = bounds.size.width - bounds.tab_size.width - bounds.margins.right;
        let max_y = bounds.size.height - bounds.tab_size.height - bounds.margins.bottom;
        prop_assert!(p.x >= bounds.margins.left && p.x <= max_x, "x = {}", p.x);
        prop_assert!(p.y >= bounds.margins.top && p.y <= max_y, "y = {}", p.y);
        prop_assert!(is_within(p, &bounds));
    }

    #[test]
    fn clamp_is_idempotent(bounds in arb_bounds(), x in arb_coord(), y in arb_coord()) {
        let once = clamp_to_bounds(x, y, &bounds);
        let twice = clamp_to_bounds(once.x, once.y, &bounds);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn inside_positions_are_unchanged(bounds in arb_bounds(), fx in 0.0..0.99f64, fy in 0.0..0.99f64) {
        let max_x = bounds.size.width - bounds.tab_size.width - bounds.margins.right;
        let max_y = bounds.size.height - bounds.tab_size.height - bounds.margins.bottom;
        let x = bounds.margins.left + fx * (max_x - bounds.margins.left);
        let y = bounds.margins.top + fy * (max_y - bounds.margins.top);
        let p = clamp_to_bounds(x, y, &bounds);
        prop_assert_eq!((p.x, p.y), (x, y));
    }

    #[test]
    fn undersized_workspace_pins_to_leading_margin(
        margin in 0.0..50.0f64,
        x in arb_coord(),
        y in arb_coord(),
    ) {
        let p = clamp(x, y, Size::new(500.0, 500.0), Size::new(100.0, 100.0), Margins::uniform(margin));
        prop_assert_eq!((p.x, p.y), (margin, margin));
    }
}
