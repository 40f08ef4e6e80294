//! Fetch orchestrator: owns the request lifecycle and the current result set.
//!
//! ```text
//! Idle ──fetch──▶ Loading ──ok──▶ Success
//!                    │  ▲           │
//!                    │  └──fetch────┤
//!                    └──err──▶ Failed
//! ```
//!
//! Entering `Loading` drops any prior result or error. Every invocation
//! issues exactly one backend call and receives a monotonically increasing
//! ticket; the [`ResolutionPolicy`] decides what happens when fetches
//! resolve out of order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::backend::{FetchError, FormPriceBackend, PriceBackend};
use crate::config::TrackerConfig;
use crate::format::DisplayOptions;
use crate::http_client::HttpClient;
use crate::normalize::normalize;
use crate::request::{build_request_with, FetchRequest, RequestOptions};
use crate::{CoinRecord, DerivedCoinRecord, IdentifierList, TimeRange, ValidationError};

/// How resolutions of overlapping fetches are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionPolicy {
    /// Only the most recently issued fetch may update state.
    #[default]
    LastIssuedWins,
    /// Every resolution overwrites state, whichever fetch it belongs to.
    LastResolvedWins,
}

/// Normalized outcome of one successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub request: FetchRequest,
    pub coins: Vec<DerivedCoinRecord>,
}

impl ResultSet {
    /// Raw provider records in response order.
    pub fn records(&self) -> impl Iterator<Item = &CoinRecord> {
        self.coins.iter().map(|coin| &coin.record)
    }
}

/// Lifecycle state; exactly one variant holds at any time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchState {
    #[default]
    Idle,
    Loading {
        ticket: u64,
        request: FetchRequest,
    },
    Success(ResultSet),
    Failed(FetchError),
}

impl FetchState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn result(&self) -> Option<&ResultSet> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Default)]
struct Selection {
    ids: Option<IdentifierList>,
    range: TimeRange,
}

/// Sole writer of [`FetchState`].
///
/// Methods take `&self` so several fetches can be in flight on one task;
/// observers follow transitions through [`FetchOrchestrator::subscribe`].
pub struct FetchOrchestrator {
    backend: Arc<dyn PriceBackend>,
    policy: ResolutionPolicy,
    request_options: RequestOptions,
    display: DisplayOptions,
    state: watch::Sender<FetchState>,
    issued: AtomicU64,
    selection: Mutex<Selection>,
}

impl FetchOrchestrator {
    pub fn new(backend: Arc<dyn PriceBackend>) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            backend,
            policy: ResolutionPolicy::default(),
            request_options: RequestOptions::default(),
            display: DisplayOptions::default(),
            state,
            issued: AtomicU64::new(0),
            selection: Mutex::new(Selection::default()),
        }
    }

    /// Build an orchestrator backed by [`FormPriceBackend`] over `http_client`.
    pub fn from_config(config: &TrackerConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let backend = FormPriceBackend::new(config.endpoint.clone(), http_client)
            .with_timeout_ms(config.timeout_ms);

        Self::new(Arc::new(backend))
            .with_policy(config.policy)
            .with_request_options(config.request)
            .with_display_options(config.display.clone())
    }

    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_request_options(mut self, request_options: RequestOptions) -> Self {
        self.request_options = request_options;
        self
    }

    pub fn with_display_options(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Currently selected time range.
    pub fn time_range(&self) -> TimeRange {
        self.selection().range
    }

    /// Parse raw input and fetch it with the selected time range.
    ///
    /// Invalid input is returned as an error without touching state or
    /// issuing a request.
    pub async fn submit(&self, raw_input: &str) -> Result<FetchState, ValidationError> {
        let ids = build_request_with(raw_input, &self.request_options)?;
        let range = self.time_range();
        Ok(self.fetch_prices(ids, range).await)
    }

    /// Change the time range and re-fetch the last submitted identifiers.
    ///
    /// Without a prior submission only the selection changes.
    pub async fn select_range(&self, range: TimeRange) -> FetchState {
        let ids = {
            let mut selection = self.selection();
            selection.range = range;
            selection.ids.clone()
        };

        match ids {
            Some(ids) => self.fetch_prices(ids, range).await,
            None => self.state(),
        }
    }

    /// Run one fetch through Loading to Success or Failed.
    ///
    /// Returns the state after this fetch resolved. When the resolution is
    /// discarded as stale the current state is returned instead.
    pub async fn fetch_prices(&self, ids: IdentifierList, range: TimeRange) -> FetchState {
        {
            let mut selection = self.selection();
            selection.ids = Some(ids.clone());
            selection.range = range;
        }

        let request = FetchRequest::new(ids, range);
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(FetchState::Loading {
            ticket,
            request: request.clone(),
        });
        debug!(ticket, ids = %request.ids, range = %range, "fetch started");

        let outcome = self.backend.fetch(&request).await;
        let next = match outcome {
            Ok(records) if records.is_empty() => {
                let error = FetchError::empty_result("backend returned no records");
                warn!(ticket, code = error.code(), detail = error.detail(), "fetch failed");
                FetchState::Failed(error)
            }
            Ok(records) => {
                let coins = normalize(&records, &self.display);
                debug!(ticket, coins = coins.len(), "fetch succeeded");
                FetchState::Success(ResultSet { request, coins })
            }
            Err(error) => {
                warn!(ticket, code = error.code(), detail = error.detail(), "fetch failed");
                FetchState::Failed(error)
            }
        };

        self.resolve(ticket, next)
    }

    fn resolve(&self, ticket: u64, next: FetchState) -> FetchState {
        let latest = self.issued.load(Ordering::SeqCst);
        if self.policy == ResolutionPolicy::LastIssuedWins && ticket != latest {
            debug!(ticket, latest, "discarding stale fetch resolution");
            return self.state();
        }

        self.state.send_replace(next.clone());
        next
    }

    fn selection(&self) -> MutexGuard<'_, Selection> {
        self.selection
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
