//! Market data loading.
//!
//! The viewer consumes a single `market_chart.json` document holding three
//! index-aligned series (price, market capitalization, volume). Everything is
//! validated once at load time so the rest of the crate can index the three
//! series with the same position.

pub mod market;

pub use market::{DataError, MarketData, MarketPoint, SeriesKind};
