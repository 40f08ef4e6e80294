use std::io::Write;
use std::sync::Arc;

use cointrack_core::{
    build_request, CryptoDataEnvelope, FetchErrorKind, FetchOrchestrator, FetchRequest,
    FixtureHttpClient, FormPriceBackend, HttpMethod, HttpResponse, PriceBackend, TimeRange,
};

const ENDPOINT: &str = "http://localhost:8080/fetch";

const SAMPLE_RESPONSE: &str = r#"{
  "cryptoData": [
    {
      "id": "bitcoin",
      "symbol": "btc",
      "name": "Bitcoin",
      "current_price": 5400000.5,
      "market_cap": 106000000000000,
      "total_volume": 2900000000000,
      "historical_data": [[1709640000000, 5000000], [1709726400000, 5400000.5]]
    },
    {
      "id": "ethereum",
      "symbol": "eth",
      "name": "Ethereum",
      "current_price": null,
      "market_cap": null,
      "historical_data": null
    }
  ]
}"#;

fn backend(client: &FixtureHttpClient) -> FormPriceBackend {
    FormPriceBackend::new(ENDPOINT, Arc::new(client.clone()))
}

fn request(raw: &str, range: TimeRange) -> FetchRequest {
    FetchRequest::new(build_request(raw).expect("valid ids"), range)
}

#[tokio::test]
async fn form_backend_posts_urlencoded_ids_and_range() {
    let client = FixtureHttpClient::new(HttpResponse::ok_json(SAMPLE_RESPONSE));

    backend(&client)
        .fetch(&request("bitcoin, ethereum", TimeRange::Week))
        .await
        .expect("records");

    let sent = client.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].url, ENDPOINT);
    assert_eq!(
        sent[0].headers.get("content-type").map(String::as_str),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        sent[0].body.as_deref(),
        Some("cryptoIDs=bitcoin%2Cethereum&timeRange=7d")
    );
    assert_eq!(sent[0].timeout_ms, None);
}

#[tokio::test]
async fn form_backend_forwards_configured_timeout() {
    let client = FixtureHttpClient::new(HttpResponse::ok_json(SAMPLE_RESPONSE));

    backend(&client)
        .with_timeout_ms(Some(2_500))
        .fetch(&request("bitcoin", TimeRange::Day))
        .await
        .expect("records");

    assert_eq!(client.requests()[0].timeout_ms, Some(2_500));
}

#[tokio::test]
async fn every_range_is_sent_with_its_wire_spelling() {
    for range in TimeRange::ALL {
        let client = FixtureHttpClient::new(HttpResponse::ok_json(SAMPLE_RESPONSE));

        backend(&client)
            .fetch(&request("bitcoin", range))
            .await
            .expect("records");

        let body = client.requests()[0].body.clone().unwrap_or_default();
        assert!(
            body.ends_with(&format!("timeRange={}", range.as_str())),
            "unexpected body {body} for {range}"
        );
    }
}

#[test]
fn envelope_decodes_records_with_null_fields() {
    let records = CryptoDataEnvelope::decode(SAMPLE_RESPONSE).expect("records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].historical_data.len(), 2);
    assert_eq!(records[0].reference_price(), Some(5_000_000.0));
    assert_eq!(records[1].current_price, None);
    assert_eq!(records[1].total_volume, None);
    assert!(records[1].historical_data.is_empty());
}

#[test]
fn envelope_accepts_history_samples_with_null_price() {
    let body = r#"{"cryptoData": [{"id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
        "current_price": 65000,
        "historical_data": [[1709640000000, 60000], [1709726400000, null]]}]}"#;

    let records = CryptoDataEnvelope::decode(body).expect("records");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].historical_data.len(), 2);
    assert_eq!(records[0].historical_data[1].price, None);
    assert_eq!(records[0].reference_price(), Some(60_000.0));
}

#[tokio::test]
async fn null_history_price_still_yields_renderable_records() {
    let body = r#"{"cryptoData": [{"id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
        "current_price": 65000,
        "historical_data": [[1709640000000, null], [1709726400000, 65000]]}]}"#;
    let client = FixtureHttpClient::new(HttpResponse::ok_json(body));
    let orchestrator = FetchOrchestrator::new(Arc::new(backend(&client)));

    let state = orchestrator.submit("bitcoin").await.expect("valid input");

    let result = state.result().expect("success state");
    let coin = &result.coins[0];
    assert_eq!(coin.percentage_change_display, "N/A");
    assert_eq!(coin.price_display, "₹65,000.00");
    assert_eq!(coin.chart.points.len(), 1);
    assert_eq!(coin.chart.points[0].value, 65_000.0);
}

#[test]
fn envelope_classifies_missing_and_malformed_payloads() {
    let cases = [
        (r#"{"cryptoData": []}"#, FetchErrorKind::EmptyResult),
        (r#"{"cryptoData": null}"#, FetchErrorKind::EmptyResult),
        ("{}", FetchErrorKind::EmptyResult),
        ("not json", FetchErrorKind::Transport),
        (r#"{"cryptoData": "bitcoin"}"#, FetchErrorKind::Transport),
    ];

    for (body, expected) in cases {
        let error = CryptoDataEnvelope::decode(body).expect_err("must fail");
        assert_eq!(error.kind(), expected, "body {body}");
    }
}

#[tokio::test]
async fn fixture_file_serves_saved_backend_response() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_RESPONSE.as_bytes())
        .expect("write fixture");

    let client = FixtureHttpClient::from_file(file.path()).expect("fixture loads");
    let records = backend(&client)
        .fetch(&request("bitcoin,ethereum", TimeRange::Year))
        .await
        .expect("records");

    assert_eq!(records[0].id, "bitcoin");
    assert_eq!(records[1].symbol, "eth");
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = FixtureHttpClient::from_file(dir.path().join("absent.json"));
    assert!(result.is_err());
}
