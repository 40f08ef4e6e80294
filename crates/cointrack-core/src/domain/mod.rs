//! # Domain Models
//!
//! Canonical domain types for cointrack.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`IdentifierList`] | Validated, trimmed list of provider coin identifiers |
//! | [`TimeRange`] | Requested history window (24h, 7d, 30d, 1y) |
//! | [`CoinRecord`] | Raw provider record with optional numeric fields |
//! | [`PriceSample`] | `(timestamp, price)` history sample |
//! | [`DerivedCoinRecord`] | Display-ready record produced by the normalizer |
//! | [`ChartSeries`] | Chart-ready `(date label, price)` series |
//!
//! Construction validates invariants; raw provider records are accepted as-is
//! and degrade to "not available" markers during normalization.

mod coin;
mod identifier;
mod time_range;

pub use coin::{ChartPoint, ChartSeries, CoinRecord, DerivedCoinRecord, PriceSample};
pub use identifier::IdentifierList;
pub use time_range::TimeRange;
