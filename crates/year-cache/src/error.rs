//! Error types for the year cache

use std::fmt;

#[derive(Debug)]
pub enum CacheError {
    /// The backing store could not be reached or rejected the command
    Unavailable(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Cache unavailable: {}", msg),
        }
    }
}

impl std::error::Error for CacheError {}

impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        Self::Unavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = CacheError::Unavailable("connection refused".to_string());
        assert_eq!(format!("{}", err), "Cache unavailable: connection refused");
    }
}
