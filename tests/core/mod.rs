//! Core module tests
//!
//! Tests for:
//! - Nearest-sample lookup and prefix slices
//! - Story validation and the built-in story
//! - Stepper transitions and the derived view
//! - Chart scale and button placement
//! - Legend formatting
//! - Settings persistence and app state types

pub mod layout_tests;
pub mod series_tests;
pub mod settings_tests;
pub mod state_tests;
