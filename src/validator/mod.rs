mod domain;
mod local;
mod types;

pub use types::{EmailAddress, SyntaxError};

use domain::check_domain;
use local::check_local;

pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_LOCAL_LEN: usize = 64;

/// Trim surrounding whitespace (byte-order marks included) and lower-case.
/// Every check runs on this form.
pub fn normalize_email(input: &str) -> String {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Structural checks, first failing rule wins.
///
/// The input is taken as-is; callers normally pass the output of
/// [`normalize_email`].
pub fn validate_syntax(email: &str) -> Result<(), SyntaxError> {
    if email.is_empty() {
        return Err(SyntaxError::Empty);
    }
    if code_units(email) > MAX_EMAIL_LEN {
        return Err(SyntaxError::TooLong);
    }
    if email.chars().any(|c| c.is_ascii_control()) {
        return Err(SyntaxError::ControlChars);
    }
    let (local, domain) = split_address(email).ok_or(SyntaxError::MissingAt)?;
    check_local(local)?;
    check_domain(domain)?;
    Ok(())
}

/// Split on the last `@`: `a@b@example.com` gives `("a@b", "example.com")`.
pub fn split_address(email: &str) -> Option<(&str, &str)> {
    email.rsplit_once('@')
}

/// Length in UTF-16 code units.
pub(crate) fn code_units(s: &str) -> usize {
    s.encode_utf16().count()
}
