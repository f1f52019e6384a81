//! Tests for shared application state types

use lunastory::state::{DetailMode, FontScale, Page, ToastType};
use lunastory::story::EventId;

#[test]
fn test_page_names() {
    assert_eq!(Page::Overview.name(), "index");
    assert_eq!(Page::Event(EventId(2)).name(), "event2");
    assert_eq!(Page::default(), Page::Overview);
}

#[test]
fn test_detail_mode_options() {
    assert_eq!(DetailMode::default(), DetailMode::ToggleInPlace);
    assert_eq!(DetailMode::all().len(), 2);
    assert_ne!(DetailMode::ToggleInPlace.name(), DetailMode::OpenEventPage.name());
}

#[test]
fn test_font_scale_multipliers_increase() {
    let multipliers: Vec<f32> = FontScale::all().iter().map(|s| s.multiplier()).collect();
    assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(FontScale::default().multiplier(), 1.0);
}

#[test]
fn test_toast_colors_differ() {
    let info = ToastType::Info.color();
    let success = ToastType::Success.color();
    let error = ToastType::Error.color();
    assert_ne!(info, success);
    assert_ne!(success, error);
    assert_eq!(ToastType::Error.text_color(), [255, 255, 255]);
}
