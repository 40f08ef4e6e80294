use serde::{Deserialize, Serialize};

use crate::backend::DEFAULT_ENDPOINT;
use crate::format::DisplayOptions;
use crate::orchestrator::ResolutionPolicy;
use crate::request::RequestOptions;

/// Runtime configuration for a tracker session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Price backend URL receiving the form submission.
    pub endpoint: String,
    /// Transport timeout; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    pub policy: ResolutionPolicy,
    pub request: RequestOptions,
    pub display: DisplayOptions,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_ms: None,
            policy: ResolutionPolicy::default(),
            request: RequestOptions::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl TrackerConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_request_options(mut self, request: RequestOptions) -> Self {
        self.request = request;
        self
    }

    pub fn with_display_options(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }
}
