//! Behavior-driven tests for the result normalizer
//!
//! These tests verify HOW raw provider records become display-ready records:
//! percentage change, localized amounts, chart series, and logo lookup.

use cointrack_core::{
    normalize, percentage_change, resolve_logo, CoinRecord, DisplayOptions, NumberLocale,
    PriceSample, DEFAULT_LOGO, NOT_AVAILABLE,
};

fn bitcoin() -> CoinRecord {
    CoinRecord::new("bitcoin", "btc", "Bitcoin")
        .with_current_price(65000.0)
        .with_market_cap(1_280_000_000_000.0)
        .with_total_volume(35_000_000_000.0)
        .with_history(vec![
            PriceSample::new(1_709_640_000_000, 60000.0),
            PriceSample::new(1_709_683_200_000, 62500.0),
            PriceSample::new(1_709_726_400_000, 65000.0),
        ])
}

// =============================================================================
// Normalizer: Percentage Change
// =============================================================================

#[test]
fn when_price_rose_from_reference_system_reports_rounded_gain() {
    // Given: Current 65000 against a first sample of 60000
    let records = [bitcoin()];

    // When: The records are normalized
    let derived = normalize(&records, &DisplayOptions::default());

    // Then: The change is 8.33 percent
    assert_eq!(derived[0].percentage_change, Some(8.33));
    assert_eq!(derived[0].percentage_change_display, "8.33%");
}

#[test]
fn when_price_fell_system_reports_negative_change() {
    assert_eq!(percentage_change(Some(50000.0), Some(60000.0)), Some(-16.67));
}

#[test]
fn when_current_price_is_missing_system_shows_not_available() {
    // Given: A record without a current price
    let record = CoinRecord::new("bitcoin", "btc", "Bitcoin")
        .with_history(vec![PriceSample::new(1_709_640_000_000, 60000.0)]);

    // When: The record is normalized
    let derived = normalize(&[record], &DisplayOptions::default());

    // Then: Both the change and the price render N/A
    assert_eq!(derived[0].percentage_change, None);
    assert_eq!(derived[0].percentage_change_display, NOT_AVAILABLE);
    assert_eq!(derived[0].price_display, NOT_AVAILABLE);
}

#[test]
fn when_history_is_empty_or_reference_is_zero_system_skips_change() {
    let no_history = CoinRecord::new("ethereum", "eth", "Ethereum").with_current_price(3000.0);
    let zero_reference = no_history
        .clone()
        .with_history(vec![PriceSample::new(1_709_640_000_000, 0.0)]);

    let derived = normalize(&[no_history, zero_reference], &DisplayOptions::default());

    assert_eq!(derived[0].percentage_change, None);
    assert_eq!(derived[1].percentage_change, None);
    assert!(derived[0].chart.is_empty());
}

// =============================================================================
// Normalizer: Localized Display Fields
// =============================================================================

#[test]
fn when_default_display_is_used_system_groups_amounts_in_lakh_style() {
    let derived = normalize(&[bitcoin()], &DisplayOptions::default());

    assert_eq!(derived[0].price_display, "₹65,000.00");
    assert_eq!(derived[0].market_cap_display, "₹12,80,00,00,00,000.00");
    assert_eq!(derived[0].volume_display, "₹35,00,00,00,000.00");
    assert_eq!(derived[0].title, "Bitcoin (BTC)");
}

#[test]
fn when_us_locale_is_selected_system_groups_by_thousands() {
    let display = DisplayOptions {
        locale: NumberLocale::EnUs,
        currency_symbol: String::from("$"),
    };

    let derived = normalize(&[bitcoin()], &display);

    assert_eq!(derived[0].market_cap_display, "$1,280,000,000,000.00");
    assert_eq!(derived[0].chart.points[0].label, "3/5/2024");
}

// =============================================================================
// Normalizer: Chart Series
// =============================================================================

#[test]
fn when_history_is_present_system_builds_series_in_input_order() {
    // Given: Samples deliberately out of chronological order
    let record = bitcoin().with_history(vec![
        PriceSample::new(1_709_726_400_000, 65000.0),
        PriceSample::new(1_709_640_000_000, 60000.0),
    ]);

    // When: The record is normalized
    let derived = normalize(&[record], &DisplayOptions::default());

    // Then: Points keep input order and carry the raw price
    let chart = &derived[0].chart;
    assert_eq!(chart.label, "Bitcoin Price History");
    assert_eq!(chart.points.len(), 2);
    assert_eq!(chart.points[0].label, "6/3/2024");
    assert_eq!(chart.points[0].value, 65000.0);
    assert_eq!(chart.points[1].label, "5/3/2024");
}

#[test]
fn when_samples_lack_a_price_system_plots_only_priced_points() {
    // Given: A history whose first and middle samples have no price
    let record = bitcoin().with_history(vec![
        PriceSample::without_price(1_709_640_000_000),
        PriceSample::new(1_709_683_200_000, 62500.0),
        PriceSample::without_price(1_709_712_000_000),
        PriceSample::new(1_709_726_400_000, 65000.0),
    ]);

    // When: The record is normalized
    let derived = normalize(&[record], &DisplayOptions::default());

    // Then: The chart keeps the priced samples and the change degrades to N/A
    let values = derived[0]
        .chart
        .points
        .iter()
        .map(|point| point.value)
        .collect::<Vec<_>>();
    assert_eq!(values, vec![62500.0, 65000.0]);
    assert_eq!(derived[0].percentage_change_display, NOT_AVAILABLE);
    assert_eq!(derived[0].price_display, "₹65,000.00");
}

// =============================================================================
// Normalizer: Logos
// =============================================================================

#[test]
fn when_symbol_is_known_system_resolves_its_logo_case_insensitively() {
    assert_eq!(
        resolve_logo("BTC"),
        "https://cryptologos.cc/logos/bitcoin-btc-logo.svg"
    );
    assert_eq!(resolve_logo("btc"), resolve_logo(" Btc "));
}

#[test]
fn when_symbol_is_unknown_system_falls_back_to_default_logo() {
    assert_eq!(resolve_logo("xyz"), DEFAULT_LOGO);
    assert_eq!(
        DEFAULT_LOGO,
        "https://cryptologos.cc/logos/default-logo.svg"
    );
}

// =============================================================================
// Normalizer: Purity
// =============================================================================

#[test]
fn when_same_records_are_normalized_twice_system_returns_identical_output() {
    // Given: A mix of complete and sparse records
    let records = vec![
        bitcoin(),
        CoinRecord::new("mystery", "xyz", "Mystery"),
    ];
    let snapshot = records.clone();

    // When: Normalization runs twice
    let first = normalize(&records, &DisplayOptions::default());
    let second = normalize(&records, &DisplayOptions::default());

    // Then: Outputs match and the input is untouched
    assert_eq!(first, second);
    assert_eq!(records, snapshot);
    assert_eq!(first[1].logo_url, DEFAULT_LOGO);
    assert_eq!(first[1].record.id, "mystery");
}
