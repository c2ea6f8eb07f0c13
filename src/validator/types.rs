use std::fmt;

use thiserror::Error;

use super::{normalize_email, validate_syntax};

/// Structural rejection, one variant per rule in evaluation order.
/// The `Display` text is the reason reported on the record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Empty email")]
    Empty,
    #[error("Exceeds 254 chars")]
    TooLong,
    #[error("Control chars found")]
    ControlChars,
    #[error("Missing @")]
    MissingAt,
    #[error("Local part too long")]
    LocalTooLong,
    #[error("Leading/trailing dot")]
    LocalDotEdge,
    #[error("Invalid domain")]
    InvalidDomain,
}

/// A trimmed, lower-cased address that passed [`validate_syntax`], split on
/// its last `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    normalized: String,
    at: usize,
}

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let normalized = normalize_email(input);
        validate_syntax(&normalized)?;
        let at = normalized.rfind('@').ok_or(SyntaxError::MissingAt)?;
        Ok(Self { normalized, at })
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn local(&self) -> &str {
        &self.normalized[..self.at]
    }

    pub fn domain(&self) -> &str {
        &self.normalized[self.at + 1..]
    }

    /// Suffix from the last `.` of the domain, dot included. A domain without
    /// any dot is returned whole.
    pub fn tld(&self) -> &str {
        let domain = self.domain();
        domain.rfind('.').map_or(domain, |idx| &domain[idx..])
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
