//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the
//! `textsmith-server` integration tests: `TestApp` spawns the real router
//! on a random port, configured against an `httpmock::MockServer` standing
//! in for the model runtime, the catalog, and the storage endpoint.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use httpmock::{Method, Mock, MockServer};
use reqwest::Client;
use serde_json::json;
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use textsmith_server::{config, router, state::build_app_state};
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
///
/// The server runs with the `local` (OpenAI-compatible) provider pointed at
/// the mock server, so tests script model responses with [`TestApp::mock_chat`].
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
provider:
  kind: "local"
  api_url: "{}"
default_model: "mock-chat-model"
catalog:
  api_url: "{}"
storage:
  api_url: "{}"
  bucket: "textsmith-test"
  region: "eu-central-1"
"#,
            mock_server.url("/v1/chat/completions"),
            mock_server.base_url(),
            mock_server.base_url(),
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Mocks a chat completion that answers `content` for any request whose
    /// body contains `prompt_fragment`. Returns the mock for hit assertions.
    pub fn mock_chat(&self, prompt_fragment: &str, content: &str) -> Mock<'_> {
        self.mock_server.mock(|when, then| {
            when.method(Method::POST)
                .path("/v1/chat/completions")
                .body_contains(prompt_fragment);
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            }));
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
