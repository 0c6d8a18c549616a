//! Static HTML pages and assets.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// `/`, `/animals` and `/zookeepers` map to their pages; other paths are
/// looked up under `public_dir` and fall back to `index.html`.
pub(crate) fn router(public_dir: &Path) -> Router {
    let index = public_dir.join("index.html");
    Router::new()
        .route_service("/", ServeFile::new(&index))
        .route_service("/animals", ServeFile::new(public_dir.join("animals.html")))
        .route_service(
            "/zookeepers",
            ServeFile::new(public_dir.join("zookeepers.html")),
        )
        .fallback_service(ServeDir::new(public_dir).fallback(ServeFile::new(index)))
}
