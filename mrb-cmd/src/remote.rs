//! Source of the dataset behind `/api/loadFile`.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the whole dataset as JSON.
    async fn fetch(&self) -> anyhow::Result<Value>;
}

/// Fetches the dataset over HTTP.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> anyhow::Result<Value> {
        log::debug!("Fetching dataset from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{} responded with {}", self.url, status);
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("{} did not return JSON", self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{load_file, ServerState, LOAD_FAILED};
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    /// Local stand-in for the object storage bucket.
    async fn spawn_bucket() -> SocketAddr {
        let app = Router::new()
            .route(
                "/missing.json",
                get(|| async { (StatusCode::NOT_FOUND, "no such object") }),
            )
            .route("/broken.json", get(|| async { "<html>not json</html>" }))
            .route("/basins.json", get(|| async { Json(json!([1, 2, 3])) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn source(addr: SocketAddr, path: &str) -> HttpSource {
        HttpSource::new(format!("http://{}{}", addr, path), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let addr = spawn_bucket().await;
        let data = source(addr, "/basins.json").fetch().await.unwrap();
        assert_eq!(data, json!([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let addr = spawn_bucket().await;
        let err = source(addr, "/missing.json").fetch().await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_json() {
        let addr = spawn_bucket().await;
        let err = source(addr, "/broken.json").fetch().await.unwrap_err();
        assert!(err.to_string().contains("did not return JSON"));
    }

    #[tokio::test]
    async fn test_load_file_over_http_failures() {
        let addr = spawn_bucket().await;
        for path in ["/missing.json", "/broken.json"] {
            let state = ServerState {
                source: Arc::new(source(addr, path)),
                public_dir: PathBuf::from("public"),
                sample_size: 1000,
            };
            let (status, Json(body)) = load_file(State(state)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "error": LOAD_FAILED }));
        }
    }
}
