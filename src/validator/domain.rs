use super::SyntaxError;

/// Domain must be non-empty and limited to `[a-zA-Z0-9.-]`.
pub(crate) fn check_domain(domain: &str) -> Result<(), SyntaxError> {
    if domain.is_empty() {
        return Err(SyntaxError::InvalidDomain);
    }
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(SyntaxError::InvalidDomain);
    }
    Ok(())
}
