//! Error types for catalog operations

use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    /// The provider call for `year` failed
    Upstream {
        year: u16,
        source: movies_api::MoviesApiError,
    },
    /// The year cache could not be reached
    CacheUnavailable(year_cache::CacheError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream { year, source } => {
                write!(f, "Upstream fetch for {} failed: {}", year, source)
            }
            Self::CacheUnavailable(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream { source, .. } => Some(source),
            Self::CacheUnavailable(e) => Some(e),
        }
    }
}

impl From<year_cache::CacheError> for CatalogError {
    fn from(e: year_cache::CacheError) -> Self {
        Self::CacheUnavailable(e)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use movies_api::MoviesApiError;
    use year_cache::CacheError;

    #[test]
    fn test_upstream_error_display() {
        let err = CatalogError::Upstream {
            year: 2016,
            source: MoviesApiError::Status(500),
        };
        assert_eq!(
            format!("{}", err),
            "Upstream fetch for 2016 failed: Movies API returned status 500"
        );
    }

    #[test]
    fn test_cache_error_converts() {
        let err: CatalogError = CacheError::Unavailable("down".to_string()).into();
        assert!(matches!(err, CatalogError::CacheUnavailable(_)));
        assert_eq!(format!("{}", err), "Cache unavailable: down");
    }
}
