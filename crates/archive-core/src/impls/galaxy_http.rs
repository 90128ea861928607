//! GalaxyClient - HTTP アダプター
//!
//! `FileSourceLister` の本番実装。wizard の入力をそろえるための
//! ヒストリー取得と設定取得も同じクライアントで行う。
//!
//! # エンドポイント
//! - `GET /api/remote_files/plugins` : ファイルソース一覧
//! - `GET /api/histories/{id}`       : ヒストリー要約
//! - `GET /api/configuration`        : `enable_celery_tasks`

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::domain::{ArchiveError, FeatureFlags, FileSource, HistoryId, HistorySummary};
use crate::ports::FileSourceLister;

pub const REMOTE_FILES_PATH: &str = "/api/remote_files/plugins";
pub const CONFIGURATION_PATH: &str = "/api/configuration";
const API_KEY_HEADER: &str = "x-api-key";

pub struct GalaxyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GalaxyClient {
    pub fn new(config: ClientConfig) -> Result<Self, ArchiveError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("archive-wizard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ArchiveError::Transport {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[instrument(skip(self))]
    pub async fn fetch_history(&self, id: &HistoryId) -> Result<HistorySummary, ArchiveError> {
        let path = format!("/api/histories/{id}");
        match self.get_json::<HistorySummary>(&path).await {
            Err(ArchiveError::Http { status: 404, .. }) => {
                Err(ArchiveError::HistoryNotFound(id.clone()))
            }
            other => other,
        }
    }

    /// Fixed flags from the configuration win over the server's answer.
    pub async fn fetch_feature_flags(&self) -> Result<FeatureFlags, ArchiveError> {
        if let Some(flags) = self.config.flags {
            return Ok(flags);
        }
        self.get_json(CONFIGURATION_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ArchiveError> {
        let url = self.config.endpoint(path);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ArchiveError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ArchiveError::Transport {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| ArchiveError::Decode { url, source })
    }
}

#[async_trait]
impl FileSourceLister for GalaxyClient {
    async fn list_file_sources(&self) -> Result<Vec<FileSource>, ArchiveError> {
        self.get_json(REMOTE_FILES_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// 1 回だけ応答する HTTP サーバー。受け取ったリクエストヘッダを返す。
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn client(base_url: String, api_key: Option<&str>) -> GalaxyClient {
        GalaxyClient::new(ClientConfig {
            base_url,
            api_key: api_key.map(str::to_string),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn lists_file_sources_with_api_key() {
        let body = serde_json::json!([{
            "id": "test-posix-source",
            "type": "posix",
            "uri_root": "gxfiles://test-posix-source",
            "label": "TestSource",
            "doc": "For testing",
            "writable": true,
        }])
        .to_string();
        let (base, server) = serve_once("200 OK", body).await;

        let sources = client(base, Some("k3y")).list_file_sources().await.unwrap();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].writable);

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /api/remote_files/plugins "));
        assert!(request.contains("x-api-key: k3y"));
    }

    #[tokio::test]
    async fn empty_listing_is_ok() {
        let (base, server) = serve_once("200 OK", "[]".to_string()).await;
        let sources = client(base, None).list_file_sources().await.unwrap();
        assert!(sources.is_empty());
        assert!(!server.await.unwrap().to_lowercase().contains("x-api-key"));
    }

    #[tokio::test]
    async fn server_error_maps_to_http_error() {
        let (base, _server) = serve_once("500 Internal Server Error", "{}".to_string()).await;
        let err = client(base, None).list_file_sources().await.unwrap_err();
        assert!(matches!(err, ArchiveError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode_error() {
        let (base, _server) = serve_once("200 OK", "{\"not\": \"a list\"}".to_string()).await;
        let err = client(base, None).list_file_sources().await.unwrap_err();
        assert!(matches!(err, ArchiveError::Decode { .. }));
    }

    #[tokio::test]
    async fn missing_history_maps_to_not_found() {
        let (base, _server) = serve_once("404 Not Found", "{}".to_string()).await;
        let err = client(base, None)
            .fetch_history(&HistoryId::new("gone"))
            .await
            .unwrap_err();
        assert!(matches!(err, ArchiveError::HistoryNotFound(id) if id.as_str() == "gone"));
    }

    #[tokio::test]
    async fn fetches_history_summary() {
        let body = serde_json::json!({
            "id": "test-history-id",
            "name": "fake-history-name",
            "archived": true,
        })
        .to_string();
        let (base, server) = serve_once("200 OK", body).await;
        let history = client(base, None)
            .fetch_history(&HistoryId::new("test-history-id"))
            .await
            .unwrap();
        assert!(history.archived);
        assert!(server
            .await
            .unwrap()
            .starts_with("GET /api/histories/test-history-id "));
    }

    #[tokio::test]
    async fn configured_flags_skip_the_server() {
        let client = GalaxyClient::new(ClientConfig {
            // 誰も listen していないポート。呼ばれたら Transport エラーになる
            base_url: "http://127.0.0.1:9".to_string(),
            flags: Some(FeatureFlags::new(true)),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.config().flags, Some(FeatureFlags::new(true)));
        assert!(client.fetch_feature_flags().await.unwrap().async_tasks_enabled);
    }

    #[tokio::test]
    async fn reads_flags_from_server_configuration() {
        let body = serde_json::json!({ "enable_celery_tasks": true, "version_major": "24.0" })
            .to_string();
        let (base, server) = serve_once("200 OK", body).await;
        let flags = client(base, None).fetch_feature_flags().await.unwrap();
        assert!(flags.async_tasks_enabled);
        assert!(server.await.unwrap().starts_with("GET /api/configuration "));
    }
}
