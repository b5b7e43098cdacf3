use std::time::Duration;

use tokio::task::JoinHandle;
use workout_web_axum::{AppState, GatewayClient, workout_web_router_no_trace};

use super::MockBackend;

/// The web front-end served on an ephemeral port, talking to its own mock backend
pub struct TestServer {
    server_handle: JoinHandle<()>,
    pub base_url: String,
    pub backend: MockBackend,
}

impl TestServer {
    pub async fn start() -> Self {
        let backend = MockBackend::start().await;
        let gateway = GatewayClient::new(&backend.base_url, Duration::from_secs(5))
            .expect("Mock backend URL should be valid");
        let app = workout_web_router_no_trace(AppState::new(gateway));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Test server has no address");

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {e}");
            }
        });

        Self {
            server_handle,
            base_url: format!("http://{addr}"),
            backend,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}
