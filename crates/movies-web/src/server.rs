//! HTTP routes

use crate::chart;
use crate::error::AppError;
use crate::pages;
use crate::state::AppState;
use axum::{
    extract::{Form, State},
    http::header,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use movies_catalog::fallback;
use movies_catalog::{CHART_YEARS, SUPPORTED_YEARS};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Form posted to `/movies`
#[derive(Deserialize)]
pub struct YearForm {
    year: Option<String>,
}

/// Form posted to `/search_movies`
#[derive(Deserialize)]
pub struct SearchForm {
    search_query: Option<String>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
    cache: CacheHealth,
}

#[derive(Serialize)]
struct CacheHealth {
    backend: &'static str,
    hits: u64,
    misses: u64,
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/load_movies", post(load_movies))
        .route("/movies", post(movies))
        .route("/plot_movies", get(plot_movies))
        .route("/search_movies", post(search_movies))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: AppState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// A release year from form input; blank or non-numeric input is rejected
fn parse_year(raw: Option<&str>) -> Result<u16, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("year is required".into()))?;

    match raw.parse::<u16>() {
        Ok(year) if year > 0 => Ok(year),
        _ => Err(AppError::Validation(format!("invalid year: {raw}"))),
    }
}

async fn index() -> Html<String> {
    Html(pages::index_page(SUPPORTED_YEARS))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.resolver.cache_stats();
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok",
        uptime_secs,
        cache: CacheHealth {
            backend: state.resolver.cache_backend(),
            hits: stats.hits,
            misses: stats.misses,
        },
    })
}

/// POST /load_movies
/// Refreshes every supported year from the provider, then redirects home.
async fn load_movies(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let report = state
        .loader
        .reload(SUPPORTED_YEARS)
        .await
        .map_err(|e| AppError::catalog("load_movies", e))?;

    if !report.is_complete() {
        let failed: Vec<u16> = report.failures.iter().map(|f| f.year).collect();
        warn!(?failed, loaded = report.loaded.len(), "Bulk load incomplete");
    }

    Ok(Redirect::to("/"))
}

/// POST /movies
async fn movies(
    State(state): State<AppState>,
    Form(form): Form<YearForm>,
) -> Result<Html<String>, AppError> {
    let year = parse_year(form.year.as_deref())?;

    let timed = state
        .resolver
        .resolve_timed(year)
        .await
        .map_err(|e| AppError::catalog(format!("movies year={year}"), e))?;

    Ok(Html(pages::movies_page(year, &timed.value, timed.elapsed)))
}

/// GET /plot_movies
async fn plot_movies(State(state): State<AppState>) -> Result<Response, AppError> {
    let cached = state
        .view
        .counts_by_year(CHART_YEARS)
        .await
        .map_err(|e| AppError::catalog("plot_movies", e))?;
    let counts = fallback::blend(&cached, state.fallback_series, state.chart_fallback);

    let png = tokio::task::spawn_blocking(move || chart::render_png(&counts))
        .await
        .map_err(|e| AppError::Internal(format!("Chart task failed: {e}")))?
        .map_err(|e| AppError::Internal(format!("Chart rendering failed: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// POST /search_movies
async fn search_movies(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let query = form
        .search_query
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("search_query is required".into()))?;

    let results = state
        .view
        .search(query)
        .await
        .map_err(|e| AppError::catalog(format!("search_movies query={query:?}"), e))?;

    Ok(Html(pages::search_page(query, &results)))
}
