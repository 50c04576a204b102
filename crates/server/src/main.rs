use std::path::PathBuf;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

mod routes;

#[derive(Clone)]
pub struct AppState {
    pub model_path: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = AppState {
        model_path: model_path_from_args(),
    };
    tracing::info!("Serving model from {}", state.model_path.display());

    let app = Router::new()
        .route("/api/health", get(routes::health))
        .route(shared::MODEL_ROUTE, get(routes::model))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", shared::SERVER_PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server running on http://localhost:{}", shared::SERVER_PORT);
    axum::serve(listener, app).await.unwrap();
}

/// Parse `--model <path>` or fall back to the bundled asset location
fn model_path_from_args() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--model" && i + 1 < args.len() {
            return PathBuf::from(&args[i + 1]);
        }
        i += 1;
    }
    PathBuf::from("assets/models").join(shared::DEFAULT_MODEL_FILE)
}
