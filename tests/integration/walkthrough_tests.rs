//! Full walkthrough tests
//!
//! Steps through the built-in story over a full daily data set, and checks the
//! event pages against the same data.

use crate::common::synthetic::{luna_market, market_json};
use crate::common::{write_temp_file, DAY_MS};
use lunastory::event_page::EventPage;
use lunastory::layout::{ChartScale, TIME_DOMAIN_END_MS, TIME_DOMAIN_START_MS};
use lunastory::state::LoadedStory;
use lunastory::stepper::{AnnotationDisplay, DetailAction, PrimaryAction, Stepper};
use lunastory::story::{EventId, Story};

#[test]
fn test_full_cycle_over_loaded_file() {
    let points: Vec<(i64, f64)> = luna_market()
        .prices()
        .samples()
        .iter()
        .map(|s| (s.timestamp, s.value))
        .collect();
    let path = write_temp_file("market_chart.json", &market_json(&points));
    let loaded = LoadedStory::load(&path, None).unwrap();

    let scale = ChartScale::new(1200.0, 600.0);
    let mut stepper = Stepper::new(loaded.story.clone());
    let mut labels = vec![stepper.primary_action().label()];
    let mut details = Vec::new();

    for _ in 0..=loaded.story.len() {
        stepper.advance();
        let view = stepper.view(&loaded.market, &scale).unwrap();
        labels.push(view.primary.label());
        details.push(view.detail.is_some());

        if let Some(annotation) = stepper.current_annotation() {
            assert_eq!(view.prices.last().map(|s| s.timestamp), Some(annotation.timestamp));
        } else {
            assert!(view.prices.is_empty());
        }
    }

    assert_eq!(
        labels,
        vec!["start", "next", "next", "next", "next", "next", "next", "reset", "start"]
    );
    assert_eq!(
        details,
        vec![false, false, true, false, true, true, true, false]
    );
}

#[test]
fn test_drill_down_on_every_event() {
    let market = luna_market();
    let scale = ChartScale::new(1200.0, 600.0);
    let mut stepper = Stepper::new(Story::luna());

    for _ in 0..7 {
        stepper.advance();
        let Some(event) = stepper.current_event() else {
            continue;
        };

        assert!(stepper.toggle_detail());
        let view = stepper.view(&market, &scale).unwrap();
        match view.annotations {
            AnnotationDisplay::LongForm { annotation, .. } => {
                assert_eq!(annotation.event, Some(event));
            }
            other => panic!("{} should show its long form, got {:?}", event, other),
        }
        assert_eq!(view.detail, Some(DetailAction::Back));

        assert!(stepper.toggle_detail());
        let view = stepper.view(&market, &scale).unwrap();
        assert!(matches!(view.annotations, AnnotationDisplay::Short(_)));
    }
}

#[test]
fn test_hover_never_runs_ahead_of_story() {
    let market = luna_market();
    let scale = ChartScale::new(1200.0, 600.0);
    let mut stepper = Stepper::new(Story::luna());

    for _ in 0..7 {
        stepper.advance();
        let current = stepper.current_annotation().map(|a| a.timestamp).unwrap();

        for t in (TIME_DOMAIN_START_MS..=TIME_DOMAIN_END_MS).step_by((30 * DAY_MS) as usize) {
            stepper.hover(t);
            let focus = stepper.view(&market, &scale).unwrap().focus;
            if t <= current {
                let point = focus.expect("pointer inside revealed range has a focus");
                assert!(point.timestamp <= current + DAY_MS / 2);
            } else {
                assert_eq!(focus, None);
            }
        }
    }
}

#[test]
fn test_primary_reaches_reset_on_last_annotation() {
    let mut stepper = Stepper::new(Story::luna());
    for _ in 0..6 {
        stepper.advance();
        assert_eq!(stepper.primary_action(), PrimaryAction::Next);
    }
    stepper.advance();
    assert_eq!(stepper.primary_action(), PrimaryAction::Reset);
}

#[test]
fn test_event_pages_show_full_history() {
    let market = luna_market();
    let story = Story::luna();

    for event in story.events() {
        let mut page = EventPage::for_event(&story, event).unwrap();
        let view = page.view(&market);
        assert_eq!(view.prices.len(), market.len());
        assert_eq!(view.annotation.event, Some(event));
        assert_eq!(view.focus, None);

        // Unbounded: even the last day of data is reachable
        page.hover(TIME_DOMAIN_END_MS + DAY_MS * 10);
        let focus = page.view(&market).focus.expect("event page focus is unbounded");
        assert_eq!(focus.index, market.len() - 1);

        page.clear_hover();
        assert_eq!(page.view(&market).focus, None);
    }
}

#[test]
fn test_event_page_for_unknown_event() {
    assert!(EventPage::for_event(&Story::luna(), EventId(0)).is_err());
}
