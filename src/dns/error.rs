use thiserror::Error;

/// Failures raised by lookup backends. The engine never surfaces these; they
/// only select the fail-open defaults.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("DNS answer for {name} could not be decoded: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("DNS answer serialization failed: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[cfg(feature = "with-system-dns")]
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },
    #[cfg(feature = "with-system-dns")]
    #[error("{record_type} lookup failed for {name}: {source}")]
    Resolve {
        name: String,
        record_type: &'static str,
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },
    #[cfg(feature = "with-system-dns")]
    #[error("TXT record {name} contains invalid UTF-8 data: {source}")]
    TxtDataUtf8 {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl LookupError {
    pub(crate) fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    pub(crate) fn decode(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            name: name.into(),
            source,
        }
    }

    pub(crate) fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize { source }
    }

    #[cfg(feature = "with-system-dns")]
    pub(crate) fn resolver_init(source: trust_dns_resolver::error::ResolveError) -> Self {
        Self::ResolverInit { source }
    }

    #[cfg(feature = "with-system-dns")]
    pub(crate) fn resolve(
        name: impl Into<String>,
        record_type: super::RecordType,
        source: trust_dns_resolver::error::ResolveError,
    ) -> Self {
        Self::Resolve {
            name: name.into(),
            record_type: record_type.as_str(),
            source,
        }
    }

    #[cfg(feature = "with-system-dns")]
    pub(crate) fn txt_data_utf8(name: impl Into<String>, source: std::str::Utf8Error) -> Self {
        Self::TxtDataUtf8 {
            name: name.into(),
            source,
        }
    }
}
