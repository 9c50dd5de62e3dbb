use crate::service::error::ValidationError;

/// Applies `default` when no limit is requested
pub(crate) fn validate_limit(
    limit: Option<u64>,
    default: u64,
    max: u64,
) -> Result<u64, ValidationError> {
    match limit {
        None => Ok(default),
        Some(limit) if (1..=max).contains(&limit) => Ok(limit),
        Some(_) => Err(ValidationError::InvalidLimit { max }),
    }
}
