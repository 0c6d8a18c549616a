//! Shared server setup for the HTTP tests.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use zookeepr::{api, Animal, AnimalStore};

pub fn animal(id: &str, name: &str, species: &str, diet: &str, traits: &[&str]) -> Animal {
    Animal {
        id: id.into(),
        name: name.into(),
        species: species.into(),
        diet: diet.into(),
        personality_traits: traits.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn zoo() -> Vec<Animal> {
    vec![
        animal("0", "Erica", "gorilla", "omnivore", &["quirky", "rash"]),
        animal("1", "Noel", "bear", "carnivore", &["impish", "sassy", "brave"]),
        animal("2", "Sarah", "bear", "carnivore", &["hungry", "brave"]),
        animal("3", "Sean", "bear", "herbivore", &["impish", "hungry"]),
    ]
}

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn start(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve the API routes only.
pub async fn start_api<S: AnimalStore + 'static>(store: Arc<S>) -> String {
    start(api::api_router(store)).await
}

/// Serve the full application with pages from `public_dir`.
pub async fn start_app<S: AnimalStore + 'static>(store: Arc<S>, public_dir: &Path) -> String {
    start(api::router(store, public_dir)).await
}
