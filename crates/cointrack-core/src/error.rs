use thiserror::Error;

/// Validation errors raised before any request leaves the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter valid cryptocurrency IDs")]
    EmptyInput,

    #[error("invalid time range '{value}', expected one of 24h, 7d, 30d, 1y")]
    InvalidTimeRange { value: String },

    #[error("invalid locale '{value}', expected one of en-in, en-us")]
    InvalidLocale { value: String },
}
