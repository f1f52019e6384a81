//! Tests for the chart scale and button placement
//!
//! Tests cover:
//! - Domain to pixel mapping and its inverse
//! - The three button placement branches and the start position

use lunastory::layout::{
    place_buttons, ChartScale, ScreenRect, BUTTON_GAP, BUTTON_HEIGHT, BUTTON_WIDTH,
    START_BUTTON_LIFT, TIME_DOMAIN_END_MS, TIME_DOMAIN_START_MS, VALUE_CEILING,
};
use lunastory::story::Offset;

// ============================================
// Scale Tests
// ============================================

#[test]
fn test_domain_is_fixed() {
    let scale = ChartScale::new(800.0, 400.0);
    assert_eq!(scale.time_domain(), (1_559_952_000_000, 1_659_744_000_000));
    assert_eq!(scale.value_domain(), (0.0, 119.18));
}

#[test]
fn test_scale_midpoints() {
    let scale = ChartScale::new(800.0, 400.0);
    let mid_time = TIME_DOMAIN_START_MS + (TIME_DOMAIN_END_MS - TIME_DOMAIN_START_MS) / 2;

    assert!((scale.x(mid_time) - 400.0).abs() < 1e-3);
    assert!((scale.y(VALUE_CEILING / 2.0) - 200.0).abs() < 1e-3);
}

#[test]
fn test_invert_x_round_trips_pixels() {
    let scale = ChartScale::new(1000.0, 500.0);
    for px in [0.0_f32, 1.0, 250.0, 999.0, 1000.0] {
        let t = scale.invert_x(px);
        assert!((scale.x(t) - px).abs() < 1e-2, "pixel {} came back as {}", px, scale.x(t));
    }
}

#[test]
fn test_invert_x_zero_width() {
    let scale = ChartScale::new(0.0, 500.0);
    assert_eq!(scale.invert_x(10.0), TIME_DOMAIN_START_MS);
}

#[test]
fn test_scale_handles_extreme_timestamps() {
    let scale = ChartScale::new(1000.0, 500.0);

    let far_left = scale.x(i64::MIN);
    let far_right = scale.x(i64::MAX);
    assert!(far_left.is_finite() && far_left < 0.0);
    assert!(far_right.is_finite() && far_right > 1000.0);

    assert_eq!(scale.invert_x(f32::MAX), i64::MAX);
}

#[test]
fn test_custom_domain() {
    let scale = ChartScale::with_domain(100.0, 50.0, (0, 10), (0.0, 5.0));
    assert_eq!(scale.point(5, 2.5), (50.0, 25.0));
    assert_eq!(scale.invert_x(100.0), 10);
}

// ============================================
// Button Placement Tests
// ============================================

#[test]
fn test_start_button_bottom_left() {
    let layout = place_buttons(None, 600.0, false);
    assert_eq!(
        layout.primary,
        ScreenRect::new(0.0, 600.0 - START_BUTTON_LIFT, BUTTON_WIDTH, BUTTON_HEIGHT)
    );
    assert_eq!(layout.detail, None);
}

#[test]
fn test_left_and_up_callout() {
    let layout = place_buttons(Some(((300.0, 200.0), Offset::new(-100.0, -100.0))), 600.0, false);
    assert_eq!(layout.primary.x, 300.0 - 100.0 - 20.0);
    assert_eq!(layout.primary.y, 200.0 - 100.0 + 50.0);
}

#[test]
fn test_left_and_down_callout() {
    let layout = place_buttons(Some(((300.0, 200.0), Offset::new(-100.0, 50.0))), 600.0, false);
    assert_eq!(layout.primary.x, 300.0 - 100.0 - 5.0);
    assert_eq!(layout.primary.y, 200.0 + 50.0 - 80.0);
}

#[test]
fn test_right_or_level_callout() {
    // Small leftward offsets do not count as pointing left
    let layout = place_buttons(Some(((300.0, 200.0), Offset::new(-2.0, 130.0))), 600.0, false);
    assert_eq!(layout.primary.x, 300.0 - 2.0 + 20.0);
    assert_eq!(layout.primary.y, 200.0 + 130.0 + 5.0);

    // dy == 0 with a left offset falls through to the default branch
    let level = place_buttons(Some(((300.0, 200.0), Offset::new(-100.0, 0.0))), 600.0, false);
    assert_eq!(level.primary.x, 300.0 - 100.0 + 20.0);
    assert_eq!(level.primary.y, 205.0);
}

#[test]
fn test_threshold_is_strict() {
    let layout = place_buttons(Some(((0.0, 0.0), Offset::new(-20.0, -50.0))), 600.0, false);
    assert_eq!(layout.primary.x, 0.0);
    assert_eq!(layout.primary.y, -45.0);
}

#[test]
fn test_detail_button_stacked() {
    let layout = place_buttons(Some(((300.0, 200.0), Offset::new(0.0, -100.0))), 600.0, true);
    let detail = layout.detail.expect("detail requested");
    assert_eq!(detail.x, layout.primary.x);
    assert_eq!(detail.y, layout.primary.y + BUTTON_HEIGHT + BUTTON_GAP);
    assert_eq!((detail.width, detail.height), (BUTTON_WIDTH, BUTTON_HEIGHT));
}

#[test]
fn test_screen_rect_helpers() {
    let rect = ScreenRect::new(10.0, 20.0, 60.0, 40.0);
    assert_eq!(rect.center(), (40.0, 40.0));
    assert!(rect.contains(10.0, 20.0));
    assert!(rect.contains(70.0, 60.0));
    assert!(!rect.contains(71.0, 40.0));
}
