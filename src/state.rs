//! Core application state types and constants.
//!
//! This module contains the data structures shared by the viewer and the
//! walkthrough CLI: the loaded story bundle, page selection, loading state and
//! the color palette.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::MarketData;
use crate::story::{EventId, Story};

// ============================================================================
// Constants
// ============================================================================

/// File name looked up next to the working directory when nothing else is given
pub const DEFAULT_DATA_FILE: &str = "data/market_chart.json";

/// Supported data file extensions (used in file dialogs)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Price line color (steel blue)
pub const PRICE_LINE_COLOR: [u8; 3] = [70, 130, 180];

/// Crosshair color
pub const CROSSHAIR_COLOR: [u8; 3] = [103, 128, 159];

/// Callout text and connector color
pub const ANNOTATION_COLOR: [u8; 3] = [68, 68, 68];

/// Callout background
pub const CALLOUT_BACKGROUND: [u8; 3] = [250, 250, 245];

/// Crosshair point radius in pixels
pub const FOCUS_RADIUS: f32 = 4.5;

/// Legend line spacing in pixels
pub const LEGEND_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Core Types
// ============================================================================

/// Market data plus the story told over it, validated against each other
#[derive(Clone, Debug)]
pub struct LoadedStory {
    /// Path to the market data file
    pub data_path: PathBuf,
    /// Display name for the data file
    pub name: String,
    /// Story file, `None` for the built-in story
    pub story_path: Option<PathBuf>,
    pub market: MarketData,
    pub story: Story,
}

impl LoadedStory {
    /// Load market data and a story (built-in when `story_path` is `None`)
    /// and check every annotation lands on a price sample.
    pub fn load(data_path: &Path, story_path: Option<&Path>) -> anyhow::Result<Self> {
        let market = MarketData::load(data_path)
            .with_context(|| format!("Loading market data from {}", data_path.display()))?;

        let story = match story_path {
            Some(path) => Story::load(path)
                .with_context(|| format!("Loading story from {}", path.display()))?,
            None => Story::luna(),
        };

        story
            .validate_against(market.prices())
            .context("Story does not line up with the market data")?;

        let name = data_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(Self {
            data_path: data_path.to_path_buf(),
            name,
            story_path: story_path.map(Path::to_path_buf),
            market,
            story,
        })
    }
}

/// Result from background loading operation
pub enum LoadResult {
    Success(Box<LoadedStory>),
    Error(String),
}

/// Current state of file loading
pub enum LoadingState {
    /// No loading in progress
    Idle,
    /// Loading a file (contains filename being loaded)
    Loading(String),
}

/// Which view fills the central panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// Step-through chart
    #[default]
    Overview,
    /// Full history with one event's long form
    Event(EventId),
}

impl Page {
    /// Page name (`index` or `event<N>`)
    pub fn name(&self) -> String {
        match self {
            Page::Overview => "index".to_string(),
            Page::Event(event) => event.page_name(),
        }
    }
}

/// What the detail button does on the overview
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailMode {
    /// Swap the short callout for the long form in place
    #[default]
    ToggleInPlace,
    /// Switch to the event page
    OpenEventPage,
}

impl DetailMode {
    pub fn name(&self) -> &'static str {
        match self {
            DetailMode::ToggleInPlace => "Toggle in place",
            DetailMode::OpenEventPage => "Open event page",
        }
    }

    pub fn all() -> &'static [DetailMode] {
        &[DetailMode::ToggleInPlace, DetailMode::OpenEventPage]
    }
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],    // Blue
            ToastType::Success => [113, 120, 78], // Olive green
            ToastType::Error => [135, 30, 28],    // Dark red
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        [255, 255, 255]
    }
}

/// Font scale preference for UI elements
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub enum FontScale {
    /// Smaller fonts (0.85x)
    Small,
    /// Default size (1.0x)
    #[default]
    Medium,
    /// Larger fonts (1.2x)
    Large,
    /// Extra large fonts (1.4x)
    ExtraLarge,
}

impl FontScale {
    /// Get the multiplier for this font scale
    pub fn multiplier(&self) -> f32 {
        match self {
            FontScale::Small => 0.85,
            FontScale::Medium => 1.0,
            FontScale::Large => 1.2,
            FontScale::ExtraLarge => 1.4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontScale::Small => "Small",
            FontScale::Medium => "Medium",
            FontScale::Large => "Large",
            FontScale::ExtraLarge => "Extra Large",
        }
    }

    pub fn all() -> &'static [FontScale] {
        &[
            FontScale::Small,
            FontScale::Medium,
            FontScale::Large,
            FontScale::ExtraLarge,
        ]
    }
}
