use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dns::DomainReport;

/// Three-way classification of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmailStatus {
    Good,
    Risky,
    Bad,
}

impl EmailStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Risky => "RISKY",
            Self::Bad => "BAD",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-check outcomes. `true` always reads as "safe": `disposable`, `role`
/// and `blacklist` are `true` when the address is NOT disposable, NOT a role
/// account and NOT blacklisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checks {
    pub syntax: bool,
    pub dns: bool,
    pub mx: bool,
    pub disposable: bool,
    pub social: bool,
    pub role: bool,
    pub blacklist: bool,
}

impl Checks {
    /// Reported when syntax fails and no other check ran.
    pub fn unrun() -> Self {
        Self {
            syntax: false,
            dns: false,
            mx: false,
            disposable: true,
            social: false,
            role: true,
            blacklist: true,
        }
    }

    /// Syntax passed; DNS-derived fields filled from `report`.
    pub fn from_dns(report: &DomainReport) -> Self {
        Self {
            syntax: true,
            dns: report.exists,
            mx: report.has_mx,
            blacklist: !report.is_blacklisted,
            ..Self::unrun()
        }
    }
}

/// Classifier output before it is bound to an address.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub status: EmailStatus,
    pub reason: String,
    pub confidence: f64,
    pub checks: Checks,
}

impl Verdict {
    pub fn new(
        status: EmailStatus,
        reason: impl Into<String>,
        confidence: f64,
        checks: Checks,
    ) -> Self {
        Self {
            status,
            reason: reason.into(),
            confidence: confidence.clamp(0.0, 1.0),
            checks,
        }
    }
}

const RESERVED_KEYS: [&str; 5] = ["email", "status", "reason", "confidence", "checks"];

/// Result of one engine invocation.
///
/// Validation fields are read-only. Callers may attach extra fields (for
/// example the source spreadsheet row) with [`EmailRecord::insert_extra`];
/// they are flattened next to the validation fields when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    email: String,
    status: EmailStatus,
    reason: String,
    confidence: f64,
    checks: Checks,
    #[serde(flatten)]
    extras: BTreeMap<String, Value>,
}

impl EmailRecord {
    pub fn new(email: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            email: email.into(),
            status: verdict.status,
            reason: verdict.reason,
            confidence: verdict.confidence.clamp(0.0, 1.0),
            checks: verdict.checks,
            extras: BTreeMap::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> EmailStatus {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn checks(&self) -> Checks {
        self.checks
    }

    pub fn extras(&self) -> &BTreeMap<String, Value> {
        &self.extras
    }

    /// Attach a caller field. Returns `false`, leaving the record untouched,
    /// when `key` names a validation field.
    pub fn insert_extra(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return false;
        }
        self.extras.insert(key, value.into());
        true
    }
}

/// Status counts over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub good: usize,
    pub risky: usize,
    pub bad: usize,
}

impl ValidationSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EmailRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            summary.add(record);
        }
        summary
    }

    pub fn add(&mut self, record: &EmailRecord) {
        self.total += 1;
        match record.status() {
            EmailStatus::Good => self.good += 1,
            EmailStatus::Risky => self.risky += 1,
            EmailStatus::Bad => self.bad += 1,
        }
    }
}
