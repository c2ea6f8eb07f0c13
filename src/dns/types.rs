use std::fmt;

use serde::{Deserialize, Serialize};

/// Record types queried by the domain resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Mx,
    Txt,
}

impl RecordType {
    /// Numeric DNS type code.
    pub fn code(self) -> u16 {
        match self {
            Self::A => 1,
            Self::Mx => 15,
            Self::Txt => 16,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Mx => "MX",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an `Answer` section, in the JSON DoH shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    #[serde(default)]
    pub data: String,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.code(),
            ttl,
            data: data.into(),
        }
    }

    pub fn is(&self, record_type: RecordType) -> bool {
        self.record_type == record_type.code()
    }
}

/// Outcome of the three lookups for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainReport {
    pub exists: bool,
    pub has_mx: bool,
    pub is_blacklisted: bool,
}

impl DomainReport {
    /// Used whenever a lookup fails: assume reachable, MX unknown.
    pub fn fail_open() -> Self {
        Self {
            exists: true,
            has_mx: false,
            is_blacklisted: false,
        }
    }
}
