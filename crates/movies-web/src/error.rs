//! Error types for the web service

use crate::pages;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use movies_catalog::CatalogError;
use std::fmt;

/// Request-level error that converts to an HTTP response
#[derive(Debug)]
pub enum AppError {
    /// A required form field was missing or unusable; sends the user home
    Validation(String),
    /// A catalog operation failed; `context` names the request it served
    Catalog {
        context: String,
        source: CatalogError,
    },
    Internal(String),
}

impl AppError {
    pub fn catalog(context: impl Into<String>, source: CatalogError) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => {
                tracing::debug!(reason = %msg, "Invalid form input, redirecting home");
                return Redirect::to("/").into_response();
            }
            AppError::Catalog {
                context,
                source: CatalogError::Upstream { year, source },
            } => {
                tracing::error!(context = %context, year, error = %source, "Movie provider failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "The movie provider could not be reached. Please try again later.",
                )
            }
            AppError::Catalog {
                context,
                source: CatalogError::CacheUnavailable(e),
            } => {
                tracing::error!(context = %context, error = %e, "Cache unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The movie cache is unavailable. Please try again later.",
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Html(pages::error_page(status, message))).into_response()
    }
}

/// Errors that stop the service from starting
#[derive(Debug)]
pub enum StartupError {
    Config(String),
    Cache(year_cache::CacheError),
    Api(movies_api::MoviesApiError),
    Io(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Cache(e) => write!(f, "{}", e),
            Self::Api(e) => write!(f, "{}", e),
            Self::Io(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Cache(e) => Some(e),
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<year_cache::CacheError> for StartupError {
    fn from(e: year_cache::CacheError) -> Self {
        Self::Cache(e)
    }
}

impl From<movies_api::MoviesApiError> for StartupError {
    fn from(e: movies_api::MoviesApiError) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for StartupError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}
