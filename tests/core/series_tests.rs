//! Tests for the series index
//!
//! Tests cover:
//! - Nearest-sample lookup, including the tie rule and clamping
//! - Agreement with a linear scan
//! - Exact-match prefix slices

use crate::common::synthetic::series;
use lunastory::series::{Sample, Series, SeriesError};

fn three_samples() -> Series {
    series(&[(0, 1.0), (10, 2.0), (20, 3.0)])
}

/// Reference nearest lookup: smallest gap, later sample on ties
fn linear_nearest(series: &Series, timestamp: i64) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, sample) in series.samples().iter().enumerate() {
        let gap = (sample.timestamp - timestamp).abs();
        match best {
            Some((_, best_gap)) if gap > best_gap => {}
            _ => best = Some((i, gap)),
        }
    }
    best.map(|(i, _)| i)
}

// ============================================
// Nearest Sample Tests
// ============================================

#[test]
fn test_nearest_prefers_closer_sample() {
    let s = three_samples();
    assert_eq!(s.nearest_index(14), Some(1));
    assert_eq!(s.samples()[1], Sample::new(10, 2.0));
}

#[test]
fn test_nearest_tie_goes_to_later_sample() {
    let s = three_samples();
    assert_eq!(s.nearest_index(15), Some(2));
    assert_eq!(s.nearest_index(5), Some(1));
}

#[test]
fn test_nearest_exact_hit() {
    let s = three_samples();
    assert_eq!(s.nearest_index(0), Some(0));
    assert_eq!(s.nearest_index(10), Some(1));
    assert_eq!(s.nearest_index(20), Some(2));
}

#[test]
fn test_nearest_clamps_outside_range() {
    let s = three_samples();
    assert_eq!(s.nearest_index(-1_000), Some(0));
    assert_eq!(s.nearest_index(1_000), Some(2));
    assert_eq!(s.nearest_index(i64::MIN), Some(0));
    assert_eq!(s.nearest_index(i64::MAX), Some(2));
}

#[test]
fn test_nearest_on_empty_series() {
    let s = Series::new(Vec::new());
    assert_eq!(s.nearest_index(0), None);
}

#[test]
fn test_nearest_single_sample() {
    let s = series(&[(100, 5.0)]);
    assert_eq!(s.nearest_index(-5), Some(0));
    assert_eq!(s.nearest_index(100), Some(0));
    assert_eq!(s.nearest_index(500), Some(0));
}

#[test]
fn test_nearest_matches_linear_scan() {
    // Uneven spacing so ties and near-ties both show up
    let s = series(&[(0, 0.0), (3, 0.0), (4, 0.0), (10, 0.0), (30, 0.0), (31, 0.0)]);
    for t in -10..=45 {
        assert_eq!(
            s.nearest_index(t),
            linear_nearest(&s, t),
            "nearest_index disagrees with linear scan at t={}",
            t
        );
    }
}

// ============================================
// Prefix Tests
// ============================================

#[test]
fn test_prefix_through_exact_timestamp() {
    let s = three_samples();
    let prefix = s.prefix_through(10).unwrap();
    assert_eq!(prefix, &[Sample::new(0, 1.0), Sample::new(10, 2.0)]);
}

#[test]
fn test_prefix_through_first_and_last() {
    let s = three_samples();
    assert_eq!(s.prefix_through(0).unwrap().len(), 1);
    assert_eq!(s.prefix_through(20).unwrap().len(), 3);
}

#[test]
fn test_prefix_through_requires_exact_match() {
    let s = three_samples();
    match s.prefix_through(12) {
        Err(SeriesError::NoExactSample { timestamp }) => assert_eq!(timestamp, 12),
        other => panic!("Expected NoExactSample, got {:?}", other),
    }
}

#[test]
fn test_position_of() {
    let s = three_samples();
    assert_eq!(s.position_of(20), Some(2));
    assert_eq!(s.position_of(19), None);
}

#[test]
fn test_time_range() {
    assert_eq!(three_samples().time_range(), Some((0, 20)));
    assert_eq!(Series::new(Vec::new()).time_range(), None);
}
