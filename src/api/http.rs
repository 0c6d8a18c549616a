//! HTTP transport - maps REST requests onto an [`AnimalStore`].
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/animals` - list, filtered by `personalityTraits`, `diet`, `species`, `name`.
//! - `GET /api/animals/:id` - one record, or 404 with an empty body.
//! - `POST /api/animals` - validate, create and persist. 400 on bad input.
//! - `GET /health` - `{ "ok": true, "animals": n }`.
//! - everything else - static pages from the public directory.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use zookeepr::{api, store::JsonFileStore};
//!
//! let store = Arc::new(JsonFileStore::open("data/animals.json")?);
//! let app = api::router(store, "public");
//! api::serve(app, "0.0.0.0:3001").await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path as UrlPath, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use super::error::ApiError;
use super::pages;
use crate::animal::{Animal, AnimalQuery, NewAnimal, INVALID_ANIMAL_MESSAGE};
use crate::store::AnimalStore;

/// Build the JSON API routes without static pages.
pub fn api_router<S: AnimalStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<S>))
        .route(
            "/api/animals",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route("/api/animals/:id", get(get_handler::<S>))
        .with_state(store)
}

/// Build the full application: API routes, static pages from
/// `public_dir`, and request tracing.
pub fn router<S: AnimalStore + 'static>(store: Arc<S>, public_dir: impl AsRef<Path>) -> Router {
    api_router(store)
        .merge(pages::router(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` at `addr` (e.g. `"0.0.0.0:3001"`) until Ctrl-C.
pub async fn serve(app: Router, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "zookeepr listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

/// `GET /health`
async fn health_handler<S: AnimalStore + 'static>(
    State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError> {
    let count = store.len()?;
    Ok(Json(json!({ "ok": true, "animals": count })))
}

/// `GET /api/animals?<criteria>`
async fn list_handler<S: AnimalStore + 'static>(
    State(store): State<Arc<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let query = AnimalQuery::from_pairs(pairs);
    let animals = store.find(&query)?;
    debug!(?query, results = animals.len(), "listed animals");
    Ok(Json(animals))
}

/// `GET /api/animals/:id`
async fn get_handler<S: AnimalStore + 'static>(
    State(store): State<Arc<S>>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Animal>, ApiError> {
    store.get(&id)?.map(Json).ok_or(ApiError::NotFound(id))
}

/// `POST /api/animals`
///
/// The body is read raw so that malformed JSON gets the same 400 as a
/// payload that fails validation.
async fn create_handler<S: AnimalStore + 'static>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let candidate: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::Invalid(INVALID_ANIMAL_MESSAGE.to_string()))?;
    let animal = NewAnimal::from_value(candidate).map_err(ApiError::Invalid)?;
    // The file rewrite blocks; keep it off the async workers.
    let created = tokio::task::spawn_blocking(move || store.create(animal))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))??;
    Ok(Json(created))
}
