//! UI rendering modules for the LunaStory application.
//!
//! - `chart` - Price plot and page layout for the overview and event pages
//! - `callouts` - Annotation callout painting
//! - `overlay` - Crosshair and legend for the focused sample
//! - `controls` - Floating stepper buttons
//! - `menu` - Menu bar (File, Story, View, Help)
//! - `toast` - Toast notifications and loading indicator
//! - `welcome` - Drop zone shown before data is loaded

use eframe::egui;

pub mod callouts;
pub mod chart;
pub mod controls;
pub mod menu;
pub mod overlay;
pub mod toast;
pub mod welcome;

/// Palette entry to an egui color
pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}
