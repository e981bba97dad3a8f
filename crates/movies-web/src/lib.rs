//! Web front end for the movie catalog
//!
//! Serves HTML pages for loading, listing and searching movies by release
//! year, and a PNG chart of movie counts per year.

pub mod chart;
pub mod config;
pub mod error;
pub mod pages;
pub mod server;
pub mod state;

pub use config::{CacheBackend, Config};
pub use error::{AppError, StartupError};
pub use server::{create_router, start_server};
pub use state::AppState;
