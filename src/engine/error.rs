use thiserror::Error;

use crate::dns::LookupError;

/// Errors raised while building an engine. Validation itself never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("HTTP client initialization failed: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    Backend(#[from] LookupError),
}

impl EngineError {
    pub(crate) fn http_client(source: reqwest::Error) -> Self {
        Self::HttpClient { source }
    }
}
