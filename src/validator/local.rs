use super::{MAX_LOCAL_LEN, SyntaxError, code_units};

/// Length then dot placement. Atom characters are not enforced.
pub(crate) fn check_local(local: &str) -> Result<(), SyntaxError> {
    if code_units(local) > MAX_LOCAL_LEN {
        return Err(SyntaxError::LocalTooLong);
    }
    if local.starts_with('.') || local.ends_with('.') {
        return Err(SyntaxError::LocalDotEdge);
    }
    Ok(())
}
