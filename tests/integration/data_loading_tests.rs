//! Market data and story loading tests
//!
//! Tests for reading documents from disk, the validation errors for malformed
//! market data, and checking a story against the loaded prices.

use crate::common::synthetic::{annotation, daily_points, market_json, story_json};
use crate::common::write_temp_file;
use lunastory::data::{DataError, MarketData, SeriesKind};
use lunastory::state::LoadedStory;
use lunastory::story::{Story, StoryError};
use std::path::Path;

// ============================================
// Market Data Tests
// ============================================

#[test]
fn test_load_market_chart_from_file() {
    let points = [(0, 1.5), (10, 2.5), (20, 3.5)];
    let path = write_temp_file("market_chart.json", &market_json(&points));

    let market = MarketData::load(&path).unwrap();
    assert_eq!(market.len(), 3);
    assert_eq!(market.prices().time_range(), Some((0, 20)));
    assert_eq!(market.market_caps().get(1).map(|s| s.value), Some(2500.0));
    assert_eq!(market.total_volumes().get(2).map(|s| s.value), Some(35.0));
    assert_eq!(market.series(SeriesKind::Prices).len(), 3);
}

#[test]
fn test_numeric_values_accepted() {
    let json = r#"{
        "prices": [[0, 1.0], [10, "2.0"]],
        "market_caps": [[0, 100], [10, "200"]],
        "total_volumes": [[0, 5], [10, 6]]
    }"#;
    let market = MarketData::from_json_str(json).unwrap();
    assert_eq!(market.prices().get(1).map(|s| s.value), Some(2.0));
    assert_eq!(market.market_caps().get(0).map(|s| s.value), Some(100.0));
}

#[test]
fn test_missing_file_reports_read_error() {
    let result = MarketData::load(Path::new("/definitely/not/here/market_chart.json"));
    assert!(matches!(result, Err(DataError::Read { .. })));
}

#[test]
fn test_invalid_json_rejected() {
    assert!(matches!(
        MarketData::from_json_str("{\"prices\": 5}"),
        Err(DataError::Json(_))
    ));
}

#[test]
fn test_unparsable_value_rejected() {
    let json = r#"{
        "prices": [[0, "1.0"], [10, "two"]],
        "market_caps": [[0, "1"], [10, "2"]],
        "total_volumes": [[0, "1"], [10, "2"]]
    }"#;
    match MarketData::from_json_str(json) {
        Err(DataError::InvalidValue {
            series,
            index,
            value,
        }) => {
            assert_eq!(series, SeriesKind::Prices);
            assert_eq!(index, 1);
            assert_eq!(value, "two");
        }
        other => panic!("Expected InvalidValue, got {:?}", other.map(|m| m.len())),
    }
}

#[test]
fn test_empty_prices_rejected() {
    let json = r#"{"prices": [], "market_caps": [], "total_volumes": []}"#;
    assert!(matches!(
        MarketData::from_json_str(json),
        Err(DataError::Empty(SeriesKind::Prices))
    ));
}

#[test]
fn test_unsorted_prices_rejected() {
    let json = r#"{
        "prices": [[0, "1"], [20, "2"], [10, "3"]],
        "market_caps": [[0, "1"], [20, "2"], [10, "3"]],
        "total_volumes": [[0, "1"], [20, "2"], [10, "3"]]
    }"#;
    assert!(matches!(
        MarketData::from_json_str(json),
        Err(DataError::NotAscending {
            series: SeriesKind::Prices,
            index: 2
        })
    ));
}

#[test]
fn test_duplicate_timestamp_rejected() {
    let json = r#"{
        "prices": [[0, "1"], [0, "2"]],
        "market_caps": [[0, "1"], [0, "2"]],
        "total_volumes": [[0, "1"], [0, "2"]]
    }"#;
    assert!(matches!(
        MarketData::from_json_str(json),
        Err(DataError::NotAscending { index: 1, .. })
    ));
}

#[test]
fn test_length_mismatch_rejected() {
    let json = r#"{
        "prices": [[0, "1"], [10, "2"]],
        "market_caps": [[0, "1"]],
        "total_volumes": [[0, "1"], [10, "2"]]
    }"#;
    assert!(matches!(
        MarketData::from_json_str(json),
        Err(DataError::LengthMismatch {
            series: SeriesKind::MarketCaps,
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn test_misaligned_timestamps_rejected() {
    let json = r#"{
        "prices": [[0, "1"], [10, "2"]],
        "market_caps": [[0, "1"], [10, "2"]],
        "total_volumes": [[0, "1"], [11, "2"]]
    }"#;
    assert!(matches!(
        MarketData::from_json_str(json),
        Err(DataError::TimestampMismatch {
            series: SeriesKind::TotalVolumes,
            index: 1,
            expected: 10,
            found: 11
        })
    ));
}

#[test]
fn test_nearest_point_combines_series() {
    let market = MarketData::from_json_str(&market_json(&[(0, 1.0), (10, 2.0), (20, 3.0)])).unwrap();
    let point = market.nearest_point(15).unwrap();
    assert_eq!(point.index, 2);
    assert_eq!(point.timestamp, 20);
    assert_eq!(point.price, 3.0);
    assert_eq!(point.market_cap, 3000.0);
    assert_eq!(point.volume, 30.0);
    assert_eq!(market.point_at(0).map(|p| p.price), Some(1.0));
    assert_eq!(market.point_at(3), None);
}

// ============================================
// Loaded Story Tests
// ============================================

#[test]
fn test_loaded_story_with_builtin_story() {
    let path = write_temp_file("market_chart.json", &market_json(&daily_points()));

    let loaded = LoadedStory::load(&path, None).unwrap();
    assert_eq!(loaded.name, "market_chart.json");
    assert_eq!(loaded.story_path, None);
    assert_eq!(loaded.story, Story::luna());

    let described = format!("{:?}", loaded);
    assert!(described.contains("market_chart.json"));
}

#[test]
fn test_loaded_story_with_story_file() {
    let data = write_temp_file("market_chart.json", &market_json(&[(0, 1.0), (10, 2.0)]));
    let story = write_temp_file(
        "story.json",
        &story_json(&[annotation(0, 1.0, "Open"), annotation(10, 2.0, "Close")]),
    );

    let loaded = LoadedStory::load(&data, Some(&story)).unwrap();
    assert_eq!(loaded.story.len(), 2);
    assert_eq!(loaded.story_path.as_deref(), Some(story.as_path()));
}

#[test]
fn test_annotation_without_sample_rejected_at_load() {
    let data = write_temp_file("market_chart.json", &market_json(&[(0, 1.0), (10, 2.0)]));
    let story = write_temp_file(
        "story.json",
        &story_json(&[annotation(0, 1.0, "Open"), annotation(5, 2.0, "Between")]),
    );

    let err = LoadedStory::load(&data, Some(&story)).unwrap_err();
    let story_err = err
        .downcast_ref::<StoryError>()
        .expect("root cause should be a story error");
    assert!(matches!(
        story_err,
        StoryError::NoMatchingSample { index: 1, timestamp: 5, .. }
    ));
}

#[test]
fn test_builtin_story_needs_matching_data() {
    // Three samples that miss every built-in annotation
    let data = write_temp_file("market_chart.json", &market_json(&[(0, 1.0), (10, 2.0)]));
    let err = LoadedStory::load(&data, None).unwrap_err();
    assert!(format!("{:#}", err).contains("does not match any sample"));
}

#[test]
fn test_bad_market_file_surfaces_context() {
    let data = write_temp_file("market_chart.json", "not json at all");
    let err = LoadedStory::load(&data, None).unwrap_err();
    assert!(format!("{:#}", err).contains("Loading market data"));
    assert!(err.downcast_ref::<DataError>().is_some());
}
