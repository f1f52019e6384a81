//! Step through a story without the GUI and print each derived view.
//!
//! Useful for checking a story file against a data file: every click of the
//! primary button is printed with the visible range, the callouts, the button
//! labels and where the buttons land on a chart of the given size.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lunastory::layout::{ChartScale, ScreenRect};
use lunastory::legend::{format_date, legend_lines};
use lunastory::state::LoadedStory;
use lunastory::stepper::{AnnotationDisplay, Stepper, StoryView};

#[derive(Parser, Debug)]
#[command(version, about = "Print every step of a LUNA/UST story")]
struct Args {
    /// Market chart JSON (prices, market_caps, total_volumes).
    data: PathBuf,

    /// Story JSON to use instead of the built-in story.
    #[arg(long)]
    story: Option<PathBuf>,

    /// Chart width in pixels used for button placement.
    #[arg(long, default_value_t = 1000.0)]
    width: f32,

    /// Chart height in pixels used for button placement.
    #[arg(long, default_value_t = 500.0)]
    height: f32,

    /// Pointer timestamp (epoch millis) to probe at every step.
    #[arg(long)]
    probe: Option<i64>,
}

fn describe_rect(rect: &ScreenRect) -> String {
    format!(
        "({:.1}, {:.1}) {}x{}",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn print_view(step: usize, stepper: &Stepper, view: &StoryView<'_>) {
    let position = match stepper.current_index() {
        Some(i) => format!("annotation {}", i + 1),
        None => "initial".to_string(),
    };
    println!("== step {} ({}) ==", step, position);

    match (view.prices.first(), view.prices.last()) {
        (Some(first), Some(last)) => println!(
            "  prices: {} samples, {} .. {}",
            view.prices.len(),
            format_date(first.timestamp),
            format_date(last.timestamp)
        ),
        _ => println!("  prices: none"),
    }

    match &view.annotations {
        AnnotationDisplay::Short(annotations) => {
            for annotation in annotations.iter() {
                let marker = if annotation.has_detail() { " [details]" } else { "" };
                println!("  callout: {}{}", annotation.display_title(), marker);
            }
        }
        AnnotationDisplay::LongForm { annotation, .. } => {
            println!("  long form: {}", annotation.display_title());
        }
    }

    println!(
        "  primary: {} at {}",
        view.primary.label(),
        describe_rect(&view.buttons.primary)
    );
    if let (Some(detail), Some(rect)) = (view.detail, view.buttons.detail) {
        println!("  detail: {} at {}", detail.label(), describe_rect(&rect));
    }

    match &view.focus {
        Some(point) => {
            for line in legend_lines(point) {
                println!("  {}", line);
            }
        }
        None if stepper.pointer().is_some() => println!("  focus: none (ahead of story)"),
        None => {}
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let loaded = LoadedStory::load(&args.data, args.story.as_deref())?;
    tracing::info!(
        "Walking {} annotations over {} samples",
        loaded.story.len(),
        loaded.market.len()
    );

    let scale = ChartScale::new(args.width, args.height);
    let mut stepper = Stepper::new(loaded.story.clone());

    // Initial state, one click per annotation, then the wrap back to the start
    for step in 0..=stepper.story().len() + 1 {
        if step > 0 {
            stepper.advance();
        }
        if let Some(t) = args.probe {
            stepper.hover(t);
        }

        let view = stepper
            .view(&loaded.market, &scale)
            .with_context(|| format!("Deriving view at step {}", step))?;
        print_view(step, &stepper, &view);

        if view.detail.is_some() {
            stepper.toggle_detail();
            let detail_view = stepper
                .view(&loaded.market, &scale)
                .with_context(|| format!("Deriving detail view at step {}", step))?;
            println!("  -- details --");
            print_view(step, &stepper, &detail_view);
            stepper.toggle_detail();
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}
