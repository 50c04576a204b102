//! Background loading of the product model.
//!
//! The GLB is fetched off the UI thread, from the asset server or a
//! local file, and the parsed meshes come back through a channel that
//! the viewport polls once per frame.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::gltf;
use crate::viewport::mesh::MeshData;

/// Where the model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    Url(String),
    File(PathBuf),
}

impl ModelSource {
    /// Arguments with an HTTP scheme are URLs, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

impl Default for ModelSource {
    fn default() -> Self {
        Self::Url(format!(
            "http://127.0.0.1:{}{}",
            shared::SERVER_PORT,
            shared::MODEL_ROUTE
        ))
    }
}

pub type LoadResult = Result<Vec<MeshData>, String>;

/// Handle to an in-flight model load. Finished after the first
/// `Some` from [`poll`](Self::poll); callers drop it then.
pub struct ModelLoader {
    receiver: Receiver<LoadResult>,
    source: ModelSource,
}

impl ModelLoader {
    /// Kick off a background load and return the polling handle.
    pub fn spawn(source: ModelSource) -> Self {
        let (sender, receiver) = mpsc::channel();
        let worker_source = source.clone();
        std::thread::spawn(move || {
            let result = fetch(&worker_source).and_then(|bytes| gltf::parse_glb(&bytes));
            // the receiver is gone when the app closed mid-load
            let _ = sender.send(result);
        });
        Self { receiver, source }
    }

    pub fn source(&self) -> &ModelSource {
        &self.source
    }

    /// Non-blocking check for the worker's result.
    pub fn poll(&mut self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("model loader stopped unexpectedly".to_string()))
            }
        }
    }
}

fn fetch(source: &ModelSource) -> Result<Vec<u8>, String> {
    match source {
        ModelSource::File(path) => {
            std::fs::read(path).map_err(|e| format!("could not read {}: {e}", path.display()))
        }
        ModelSource::Url(url) => fetch_url(url),
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("could not start async runtime: {e}"))?;

    runtime.block_on(async {
        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request to {url} failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("server rejected the model request: {e}"))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("could not read the model body: {e}"))?;
        Ok(bytes.to_vec())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::triangle_glb;
    use std::path::Path;
    use std::time::Duration;

    fn wait(loader: &mut ModelLoader) -> LoadResult {
        for _ in 0..200 {
            if let Some(result) = loader.poll() {
                return result;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("loader did not finish in time");
    }

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("vitrine-{}-{name}", std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_from_arg_detects_urls() {
        assert_eq!(
            ModelSource::from_arg("http://localhost:3001/api/model"),
            ModelSource::Url("http://localhost:3001/api/model".to_string())
        );
        assert_eq!(
            ModelSource::from_arg("assets/models/gaming-chair.glb"),
            ModelSource::File(PathBuf::from("assets/models/gaming-chair.glb"))
        );
    }

    #[test]
    fn test_default_source_points_at_the_asset_server() {
        let ModelSource::Url(url) = ModelSource::default() else {
            panic!("default source must be a URL");
        };
        assert!(url.contains(":3001"), "{url}");
        assert!(url.ends_with("/api/model"), "{url}");
    }

    #[test]
    fn test_loads_a_file_source() {
        let path = temp_file("ok.glb", &triangle_glb());
        let mut loader = ModelLoader::spawn(ModelSource::File(path.clone()));
        let meshes = wait(&mut loader).expect("triangle fixture must load");
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].vertex_count(), 3);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_reports_error() {
        let mut loader =
            ModelLoader::spawn(ModelSource::File(Path::new("/no/such/file.glb").into()));
        let err = wait(&mut loader).unwrap_err();
        assert!(err.contains("could not read"), "{err}");
    }

    #[test]
    fn test_garbage_bytes_report_parse_error() {
        let path = temp_file("bad.glb", b"not a model at all");
        let mut loader = ModelLoader::spawn(ModelSource::File(path.clone()));
        let err = wait(&mut loader).unwrap_err();
        assert!(err.contains("not a GLB"), "{err}");
        let _ = std::fs::remove_file(path);
    }
}
