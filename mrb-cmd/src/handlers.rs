//! HTTP handlers for the data endpoints.

use crate::remote::DatasetSource;
use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mrb_basins::loader::{parse_basins, BASINS_FILE_NAME};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const LOAD_OK: &str = "File loaded successfully";
pub const LOAD_FAILED: &str = "Failed to load the file";
pub const BASINS_FAILED: &str = "Failed to load basin data";

#[derive(Clone)]
pub struct ServerState {
    pub source: Arc<dyn DatasetSource>,
    pub public_dir: PathBuf,
    pub sample_size: usize,
}

/// Keep the first `n` elements of a payload.
///
/// Arrays are truncated directly; for a GeoJSON object its `features` array
/// is truncated instead. Anything else is returned unchanged.
pub fn sample(data: Value, n: usize) -> Value {
    match data {
        Value::Array(mut items) => {
            items.truncate(n);
            Value::Array(items)
        }
        Value::Object(mut map) => {
            if let Some(Value::Array(features)) = map.get_mut("features") {
                features.truncate(n);
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// GET /api/loadFile - remote dataset, truncated to the sample size
pub async fn load_file(State(state): State<ServerState>) -> (StatusCode, Json<Value>) {
    match state.source.fetch().await {
        Ok(data) => {
            let data = sample(data, state.sample_size);
            (
                StatusCode::OK,
                Json(json!({ "message": LOAD_OK, "data": data })),
            )
        }
        Err(e) => {
            log::error!("Error fetching the file: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": LOAD_FAILED })),
            )
        }
    }
}

/// GET /api/basins - the static dataset, validated through the loader
pub async fn basins(State(state): State<ServerState>) -> (StatusCode, Json<Value>) {
    let path = state.public_dir.join(BASINS_FILE_NAME);
    match read_dataset(&path).await {
        Ok(data) => (StatusCode::OK, Json(data)),
        Err(e) => {
            log::error!("Error loading GeoJSON data: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": BASINS_FAILED })),
            )
        }
    }
}

async fn read_dataset(path: &Path) -> anyhow::Result<Value> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let basins = parse_basins(&text)?;
    log::info!("Serving {} basin features", basins.len());
    serde_json::to_value(basins.feature_collection()).context("failed to serialize basins")
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeSource(Option<Value>);

    #[async_trait]
    impl DatasetSource for FakeSource {
        async fn fetch(&self) -> anyhow::Result<Value> {
            self.0
                .clone()
                .ok_or_else(|| anyhow::anyhow!("host unreachable"))
        }
    }

    fn state(source: FakeSource, public_dir: PathBuf, sample_size: usize) -> ServerState {
        ServerState {
            source: Arc::new(source),
            public_dir,
            sample_size,
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mrb-cmd-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_file_failure() {
        let state = state(FakeSource(None), PathBuf::from("public"), 1000);
        let (status, Json(body)) = load_file(State(state)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to load the file" }));
    }

    #[tokio::test]
    async fn test_load_file_truncates_array() {
        let items: Vec<Value> = (0..1500).map(|i| json!({ "id": i })).collect();
        let state = state(FakeSource(Some(Value::Array(items))), PathBuf::from("public"), 1000);
        let (status, Json(body)) = load_file(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "File loaded successfully");
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1000);
        assert_eq!(data[999]["id"], 999);
    }

    #[tokio::test]
    async fn test_load_file_short_payload_untouched() {
        let payload = json!([1, 2, 3]);
        let state = state(FakeSource(Some(payload.clone())), PathBuf::from("public"), 1000);
        let (_, Json(body)) = load_file(State(state)).await;
        assert_eq!(body["data"], payload);
    }

    #[test]
    fn test_sample_feature_collection() {
        let fc = json!({
            "type": "FeatureCollection",
            "features": [{"id": 1}, {"id": 2}, {"id": 3}]
        });
        let sampled = sample(fc, 2);
        assert_eq!(sampled["type"], "FeatureCollection");
        assert_eq!(sampled["features"].as_array().unwrap().len(), 2);
        assert_eq!(sample(json!("text"), 2), json!("text"));
    }

    #[tokio::test]
    async fn test_basins_serves_static_file() {
        let dir = scratch_dir("basins-ok");
        std::fs::write(
            dir.join(BASINS_FILE_NAME),
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": null, "properties": {"RIVERBASIN": "Nile", "population": 10}}
            ]}"#,
        )
        .unwrap();

        let (status, Json(body)) = basins(State(state(FakeSource(None), dir.clone(), 1000))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["features"][0]["properties"]["RIVERBASIN"], "Nile");
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_basins_missing_file() {
        let dir = scratch_dir("basins-missing");
        let (status, Json(body)) = basins(State(state(FakeSource(None), dir.clone(), 1000))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], BASINS_FAILED);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");
    }
}
