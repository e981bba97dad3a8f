//! Error types for the movies API client

use std::fmt;

/// Errors that can occur when talking to the movies provider
#[derive(Debug)]
pub enum MoviesApiError {
    /// HTTP request failed (connect, timeout, body read)
    Http(reqwest::Error),
    /// Provider answered with a non-2xx status
    Status(u16),
    /// Response body was not JSON
    Json(serde_json::Error),
    /// Configured base URL could not be parsed
    Url(url::ParseError),
}

impl MoviesApiError {
    /// Whether another attempt might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status(code) => *code >= 500,
            Self::Json(_) | Self::Url(_) => false,
        }
    }
}

impl fmt::Display for MoviesApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Movies API HTTP error: {}", e),
            Self::Status(code) => write!(f, "Movies API returned status {}", code),
            Self::Json(e) => write!(f, "Movies API JSON parse error: {}", e),
            Self::Url(e) => write!(f, "Movies API URL error: {}", e),
        }
    }
}

impl std::error::Error for MoviesApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status(_) => None,
            Self::Json(e) => Some(e),
            Self::Url(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for MoviesApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for MoviesApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<url::ParseError> for MoviesApiError {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}

/// Result type for movies API operations
pub type Result<T> = std::result::Result<T, MoviesApiError>;
