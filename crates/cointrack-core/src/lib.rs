//! # Cointrack Core
//!
//! Client-side pipeline for tracking cryptocurrency prices: parse identifier
//! input, run the fetch lifecycle against a price backend, and derive
//! display-ready records.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`backend`] | Price backend trait, form-posting backend, fetch errors |
//! | [`config`] | Tracker configuration |
//! | [`domain`] | Domain models (IdentifierList, TimeRange, CoinRecord) |
//! | [`error`] | Core error types |
//! | [`format`] | Locale-aware money, percentage, and date formatting |
//! | [`http_client`] | HTTP client abstraction |
//! | [`logo`] | Static symbol to logo table |
//! | [`normalize`] | Raw records to display-ready records |
//! | [`orchestrator`] | Fetch lifecycle state machine |
//! | [`request`] | Free-text input to validated identifier list |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cointrack_core::{FetchOrchestrator, FetchState, ReqwestHttpClient, TrackerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = FetchOrchestrator::from_config(
//!         &TrackerConfig::default(),
//!         Arc::new(ReqwestHttpClient::new()),
//!     );
//!
//!     match orchestrator.submit("bitcoin, ethereum").await? {
//!         FetchState::Success(result) => {
//!             for coin in &result.coins {
//!                 println!("{}: {} ({})", coin.title, coin.price_display, coin.percentage_change_display);
//!             }
//!         }
//!         FetchState::Failed(error) => eprintln!("{}", error.user_message()),
//!         _ => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ Request Builder │  "bitcoin, eth" ─▶ IdentifierList
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Orchestrator    │────▶│ PriceBackend     │──▶ HTTP client
//! │ (FetchState)    │     │ (form POST)      │
//! └────────┬────────┘     └──────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Normalizer      │  CoinRecord ─▶ DerivedCoinRecord
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Input problems surface as [`ValidationError`] before any request is
//! made. Fetch problems never escape the orchestrator; they become
//! [`FetchState::Failed`] carrying a [`FetchError`]:
//!
//! ```rust
//! use cointrack_core::{FetchError, FetchErrorKind};
//!
//! fn describe(error: &FetchError) -> &'static str {
//!     match error.kind() {
//!         FetchErrorKind::Transport => "network or backend failure",
//!         FetchErrorKind::EmptyResult => "no data for the requested coins",
//!     }
//! }
//! ```

pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod http_client;
pub mod logo;
pub mod normalize;
pub mod orchestrator;
pub mod request;

// Backend contract and errors
pub use backend::{
    CryptoDataEnvelope, FetchError, FetchErrorKind, FormPriceBackend, PriceBackend,
    DEFAULT_ENDPOINT, RETRY_GUIDANCE,
};

// Configuration
pub use config::TrackerConfig;

// Domain models
pub use domain::{
    ChartPoint, ChartSeries, CoinRecord, DerivedCoinRecord, IdentifierList, PriceSample,
    TimeRange,
};

// Error types
pub use error::ValidationError;

// Formatting
pub use format::{
    format_currency, format_date, format_percentage, DisplayOptions, NumberLocale, NOT_AVAILABLE,
};

// HTTP client types
pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};

// Logo lookup
pub use logo::{resolve_logo, DEFAULT_LOGO};

// Normalizer
pub use normalize::{derive_record, normalize, percentage_change};

// Orchestrator
pub use orchestrator::{FetchOrchestrator, FetchState, ResolutionPolicy, ResultSet};

// Request builder
pub use request::{build_request, build_request_with, FetchRequest, RequestOptions};
