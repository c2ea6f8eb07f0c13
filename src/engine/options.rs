use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dns::DohResolver;
use crate::social::GravatarProbe;

/// Configuration for the HTTP-backed engine built by
/// [`ValidationEngine::with_options`](super::ValidationEngine::with_options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub doh_endpoint: String,
    pub avatar_endpoint: String,
    /// Per-request timeout. Zero keeps the transport default.
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            doh_endpoint: DohResolver::DEFAULT_ENDPOINT.to_string(),
            avatar_endpoint: GravatarProbe::DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 0,
            user_agent: format!("mailsift/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl EngineOptions {
    /// Return the timeout as a [`Duration`]. A zero timeout means none is set.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }
}
