//! Request builder: free-text identifier input to a validated request.
//!
//! ```rust
//! use cointrack_core::build_request;
//!
//! let ids = build_request("bitcoin, ethereum , , litecoin").unwrap();
//! assert_eq!(ids.as_slice(), ["bitcoin", "ethereum", "litecoin"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{IdentifierList, TimeRange, ValidationError};

/// Form field carrying the comma-joined identifier list.
pub const IDS_FIELD: &str = "cryptoIDs";
/// Form field carrying the selected time range.
pub const RANGE_FIELD: &str = "timeRange";

/// Knobs applied while parsing raw identifier input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Drop repeated identifiers, keeping the first occurrence.
    pub dedupe: bool,
}

/// Parse raw input with default options (duplicates kept).
pub fn build_request(raw_input: &str) -> Result<IdentifierList, ValidationError> {
    build_request_with(raw_input, &RequestOptions::default())
}

/// Parse comma-separated identifier input into an [`IdentifierList`].
pub fn build_request_with(
    raw_input: &str,
    options: &RequestOptions,
) -> Result<IdentifierList, ValidationError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let ids = IdentifierList::new(trimmed.split(','))?;
    Ok(if options.dedupe { ids.dedup() } else { ids })
}

/// One outbound fetch: identifiers plus history window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub ids: IdentifierList,
    pub range: TimeRange,
}

impl FetchRequest {
    pub fn new(ids: IdentifierList, range: TimeRange) -> Self {
        Self { ids, range }
    }

    /// Form fields in submission order.
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            (IDS_FIELD, self.ids.joined()),
            (RANGE_FIELD, self.range.as_str().to_owned()),
        ]
    }
}
