//! Result normalizer: raw coin records to display-ready records.
//!
//! Normalization is pure and total. Missing numbers never raise errors; they
//! degrade to the `N/A` marker so a successful fetch always renders.

use crate::format::{format_currency, format_date, format_percentage, DisplayOptions};
use crate::logo::resolve_logo;
use crate::{ChartPoint, ChartSeries, CoinRecord, DerivedCoinRecord};

/// Derive display-ready records, one per input record, in input order.
pub fn normalize(records: &[CoinRecord], options: &DisplayOptions) -> Vec<DerivedCoinRecord> {
    records
        .iter()
        .map(|record| derive_record(record, options))
        .collect()
}

/// Derive a single display-ready record.
pub fn derive_record(record: &CoinRecord, options: &DisplayOptions) -> DerivedCoinRecord {
    let percentage_change = percentage_change(record.current_price, record.reference_price());

    DerivedCoinRecord {
        record: record.clone(),
        percentage_change,
        percentage_change_display: format_percentage(percentage_change),
        price_display: format_currency(record.current_price, options),
        market_cap_display: format_currency(record.market_cap, options),
        volume_display: format_currency(record.total_volume, options),
        logo_url: resolve_logo(&record.symbol).to_owned(),
        title: format!("{} ({})", record.name, record.symbol.to_uppercase()),
        chart: chart_series(record, options),
    }
}

/// `((current - reference) / reference) * 100`, rounded to 2 decimals.
///
/// `None` when either price is missing, zero, or not finite.
pub fn percentage_change(current: Option<f64>, reference: Option<f64>) -> Option<f64> {
    let current = current.filter(|value| value.is_finite() && *value != 0.0)?;
    let reference = reference.filter(|value| value.is_finite() && *value != 0.0)?;

    let change = ((current - reference) / reference) * 100.0;
    let rounded = (change * 100.0).round() / 100.0;
    rounded.is_finite().then_some(rounded)
}

/// Map history samples to chart points, preserving provider order.
///
/// Samples without a price have nothing to plot and are skipped.
pub fn chart_series(record: &CoinRecord, options: &DisplayOptions) -> ChartSeries {
    ChartSeries {
        label: format!("{} Price History", record.name),
        points: record
            .historical_data
            .iter()
            .filter_map(|sample| {
                sample.price.map(|value| ChartPoint {
                    label: format_date(sample.timestamp_ms, options.locale),
                    value,
                })
            })
            .collect(),
    }
}
