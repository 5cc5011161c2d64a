//! Error types for the multiway index.

use thiserror::Error;

/// Result type alias for index operations.
pub type Result<T> = core::result::Result<T, IndexError>;

/// Error type for index operations.
///
/// Lookup misses and duplicate keys are normal outcomes, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The supplied key was the absent (`None`) sentinel.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl IndexError {
    pub(crate) const fn absent_key() -> Self {
        IndexError::InvalidArgument("key must not be absent")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_absent_key_message() {
        let err = IndexError::absent_key();
        assert_eq!(err.to_string(), "invalid argument: key must not be absent");
        assert_eq!(err, IndexError::InvalidArgument("key must not be absent"));
    }
}
