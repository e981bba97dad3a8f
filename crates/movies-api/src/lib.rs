//! Rust client for the movies-tv-shows-database provider on RapidAPI
//!
//! The provider answers "movies released in year N" queries with a JSON
//! document. This crate keeps that document opaque: callers get a
//! [`MoviePayload`] exactly as the provider sent it, plus a few lenient
//! accessors for the `movie_results` list.
//!
//! # Example
//!
//! ```no_run
//! use movies_api::{MoviesApiClient, MoviesApiConfig};
//!
//! # async fn example() -> Result<(), movies_api::MoviesApiError> {
//! let client = MoviesApiClient::new(MoviesApiConfig::new("secret-key"))?;
//!
//! let payload = client.fetch_year(2015).await?;
//! for title in payload.titles() {
//!     println!("{}", title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /?year={year}&page=1` with `Type: get-movies-byyear`

mod client;
mod error;
mod types;

pub use client::{MoviesApiClient, MoviesApiConfig};
pub use error::{MoviesApiError, Result};
pub use types::{MoviePayload, MovieRecord};
