use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::AppState;

/// Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serve the product model as GLB. The file never changes under one
/// name, so clients may cache it for a year.
pub async fn model(State(state): State<AppState>) -> Response {
    match tokio::fs::read(&state.model_path).await {
        Ok(bytes) => model_response(bytes),
        Err(e) => {
            tracing::error!("Failed to read model {}: {e}", state.model_path.display());
            not_found()
        }
    }
}

fn model_response(bytes: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, shared::MODEL_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, bytes.len())
        .header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
        .body(Body::from(bytes))
        .unwrap()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "model not found" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(value) = health().await;
        assert_eq!(value["status"], "ok");
    }

    #[test]
    fn test_model_response_headers() {
        let response = model_response(vec![1, 2, 3, 4]);
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], shared::MODEL_CONTENT_TYPE);
        assert_eq!(headers[header::CONTENT_LENGTH], "4");
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_json_404() {
        let state = AppState {
            model_path: std::path::PathBuf::from("no-such-dir/no-such-model.glb"),
        };
        let response = model(State(state)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "model not found");
    }

    #[tokio::test]
    async fn test_model_serves_file_bytes() {
        let dir = std::env::temp_dir().join("vitrine-model-route-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chair.glb");
        std::fs::write(&path, b"glTF fake bytes").unwrap();

        let state = AppState { model_path: path };
        let response = model(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"glTF fake bytes");
    }
}
