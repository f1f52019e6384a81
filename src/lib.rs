//! LunaStory - an annotated, step-through price chart of the LUNA/UST collapse
//!
//! This library holds the story model (market data, annotations, the stepper
//! state machine, layout math) and the egui front end that renders it.
//!
//! ## Module Structure
//!
//! - [`series`] - Time-ordered samples with nearest-sample and prefix lookups
//! - [`data`] - Market chart data (prices, market caps, volumes) and its loader
//! - [`story`] - Annotations, long-form event narratives and the built-in story
//! - [`stepper`] - Click-through state machine and the derived chart view
//! - [`event_page`] - Standalone page for a single event
//! - [`layout`] - Chart scale and button placement
//! - [`legend`] - Date and currency formatting for the legend
//! - [`state`] - Shared app types and constants
//! - [`settings`] - User settings persistence
//! - [`app`] - Main application state and eframe::App implementation
//! - [`ui`] - User interface components
//!   - `chart` - Price plot with overlays for both pages
//!   - `callouts` - Annotation callouts
//!   - `overlay` - Crosshair and legend
//!   - `controls` - Stepper buttons
//!   - `menu` - Menu bar
//!   - `toast` - Toast notification system
//!   - `welcome` - Drop zone shown before data is loaded

pub mod app;
pub mod data;
pub mod event_page;
pub mod layout;
pub mod legend;
pub mod series;
pub mod settings;
pub mod state;
pub mod stepper;
pub mod story;
pub mod ui;
