//! Test utilities shared by the unit tests of this crate
//!
//! `MockBackend` serves an axum router on an ephemeral local port and records
//! every request it receives, so tests can assert on the outbound header
//! contract as well as on the results.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    middleware::{Next, from_fn_with_state},
    response::Response,
};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::gateway::GatewayClient;

/// One request as seen by the mock backend
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<Recorded>>>);

pub struct MockBackend {
    pub base_url: String,
    log: CallLog,
}

impl MockBackend {
    pub async fn spawn(router: Router) -> Self {
        let log = CallLog::default();
        let app = router.layer(from_fn_with_state(log.clone(), record));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock backend error: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}/"),
            log,
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.log.0.lock().unwrap().clone()
    }

    pub fn client(&self) -> GatewayClient {
        GatewayClient::new(&self.base_url, std::time::Duration::from_secs(5))
            .expect("Mock backend URL should be valid")
    }
}

async fn record(State(log): State<CallLog>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let header = |name: http::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    log.0.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: serde_json::from_slice(&bytes).ok(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
