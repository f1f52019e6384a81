//! LunaStory - the rise and fall of LUNA and UST as an annotated price chart
//!
//! Click through the story one annotation at a time; hover the chart to read
//! the price, market cap and volume of the nearest day.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lunastory::app::{LaunchOptions, LunaStoryApp};
use lunastory::story::EventId;

#[derive(Parser, Debug)]
#[command(version, about = "Annotated LUNA/UST price chart")]
struct Args {
    /// Market chart JSON (prices, market_caps, total_volumes).
    data: Option<PathBuf>,

    /// Story JSON to use instead of the built-in story.
    #[arg(long)]
    story: Option<PathBuf>,

    /// Open the page of this event instead of the overview.
    #[arg(long)]
    event: Option<u8>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    // RUST_LOG controls verbosity; default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let launch = LaunchOptions {
        data_file: args.data,
        story_file: args.story,
        event: args.event.map(EventId),
    };

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("LunaStory - LUNA & UST")
            .with_app_id("LunaStory")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "LunaStory",
        native_options,
        Box::new(|cc| Ok(Box::new(LunaStoryApp::new(cc, launch)))),
    )
}
