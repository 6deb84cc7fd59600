use thiserror::Error;

/// Field-level validation failures raised before a row is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{0} must not be empty")]
    Empty(String),
    #[error("invalid entity: {0}")]
    Invalid(String),
}

/// Fails with [`ModelError::Empty`] when `value` is blank.
pub fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Empty(field.to_string()));
    }
    Ok(())
}

/// Fails with [`ModelError::Invalid`] when `value` is longer than the `VARCHAR(max)` column storing it.
pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Invalid(format!("{field} exceeds {max} characters")));
    }
    Ok(())
}

/// Fails with [`ModelError::Invalid`] carrying `msg` unless `cond` holds.
pub fn ensure(cond: bool, msg: &str) -> Result<(), ModelError> {
    if !cond {
        return Err(ModelError::Invalid(msg.to_string()));
    }
    Ok(())
}
