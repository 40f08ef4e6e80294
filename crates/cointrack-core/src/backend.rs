//! Price backend contract and the form-posting implementation.
//!
//! The backend is an opaque collaborator: it receives the comma-joined
//! identifier list and time range as a form submission and answers with a
//! JSON envelope `{"cryptoData": [...]}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cointrack_core::{build_request, FetchRequest, FormPriceBackend, PriceBackend, ReqwestHttpClient, TimeRange};
//!
//! let backend = FormPriceBackend::new("http://localhost:8080/fetch", Arc::new(ReqwestHttpClient::new()));
//! let request = FetchRequest::new(build_request("bitcoin")?, TimeRange::Week);
//! let records = backend.fetch(&request).await?;
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http_client::{HttpClient, HttpRequest};
use crate::request::FetchRequest;
use crate::CoinRecord;

/// Default endpoint of the price backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/fetch";

/// Message shown for every fetch failure, whatever the cause.
pub const RETRY_GUIDANCE: &str = "Error fetching data. Please try again later.";

/// Fetch failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// Network failure, non-success status, or an undecodable body.
    Transport,
    /// Well-formed response without any coin records.
    EmptyResult,
}

/// Structured fetch error held by the `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchError {
    kind: FetchErrorKind,
    detail: String,
}

impl FetchError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            detail: detail.into(),
        }
    }

    pub fn empty_result(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::EmptyResult,
            detail: detail.into(),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    /// Diagnostic detail for logs; not meant for end users.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// User-facing message, identical for every failure kind.
    pub const fn user_message(&self) -> &'static str {
        RETRY_GUIDANCE
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::EmptyResult => "fetch.empty_result",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.detail, self.code())
    }
}

impl std::error::Error for FetchError {}

/// Backend contract: one call resolves to the raw coin records.
///
/// Implementations must issue exactly one outbound request per call and must
/// not retry on their own.
pub trait PriceBackend: Send + Sync {
    fn fetch<'a>(
        &'a self,
        request: &'a FetchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CoinRecord>, FetchError>> + Send + 'a>>;
}

/// Response envelope returned by the backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CryptoDataEnvelope {
    #[serde(rename = "cryptoData", default)]
    pub crypto_data: Option<Vec<CoinRecord>>,
}

impl CryptoDataEnvelope {
    /// Decode a response body; an absent, null, or empty `cryptoData` is `EmptyResult`.
    pub fn decode(body: &str) -> Result<Vec<CoinRecord>, FetchError> {
        let envelope: Self = serde_json::from_str(body).map_err(|error| {
            FetchError::transport(format!("failed to decode backend response: {error}"))
        })?;

        match envelope.crypto_data {
            Some(records) if !records.is_empty() => Ok(records),
            Some(_) => Err(FetchError::empty_result("backend returned an empty cryptoData array")),
            None => Err(FetchError::empty_result("backend response has no cryptoData field")),
        }
    }
}

/// Backend that POSTs a url-encoded form to a fixed endpoint.
#[derive(Clone)]
pub struct FormPriceBackend {
    endpoint: String,
    http_client: Arc<dyn HttpClient>,
    timeout_ms: Option<u64>,
}

impl FormPriceBackend {
    pub fn new(endpoint: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client,
            timeout_ms: None,
        }
    }

    /// Ask the transport to abort requests that exceed `timeout_ms`.
    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl PriceBackend for FormPriceBackend {
    fn fetch<'a>(
        &'a self,
        request: &'a FetchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CoinRecord>, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let http_request = HttpRequest::post(&self.endpoint)
                .with_form(&request.form_fields())
                .with_timeout_ms(self.timeout_ms);

            debug!(
                endpoint = %self.endpoint,
                ids = %request.ids,
                range = %request.range,
                "posting price request"
            );

            let response = self
                .http_client
                .execute(http_request)
                .await
                .map_err(|error| {
                    FetchError::transport(format!("backend transport error: {}", error.message()))
                })?;

            if !response.is_success() {
                return Err(FetchError::transport(format!(
                    "backend returned status {}",
                    response.status
                )));
            }

            CryptoDataEnvelope::decode(&response.body)
        })
    }
}
