//! Integration tests
//!
//! Tests for:
//! - Loading and validating market data and story files
//! - Complete walkthroughs of the story over loaded data

pub mod data_loading_tests;
pub mod walkthrough_tests;
