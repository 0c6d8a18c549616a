#![forbid(unsafe_code)]

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zookeepr::{api, Config, JsonFileStore};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let config = Config::from_env();
    info!(
        data = %config.data_path.display(),
        public = %config.public_dir.display(),
        "starting zookeepr"
    );

    let store = match JsonFileStore::open(&config.data_path) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            error!(error = %err, "failed to load animal data");
            return ExitCode::FAILURE;
        }
    };

    let app = api::router(store, &config.public_dir);
    if let Err(err) = api::serve(app, &config.bind_addr()).await {
        error!(addr = %config.bind_addr(), error = %err, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
