//! Stand-in for the workout backend API
//!
//! Serves a small axum router on an ephemeral local port and records every
//! request so tests can count backend calls and inspect what was sent.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Path, Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use super::{GOOD_TOKEN, REVOKED_FOR_WORKOUTS_TOKEN, REVOKED_ON_WRITE_TOKEN};

/// One request as seen by the mock backend
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<Recorded>>>);

pub struct MockBackend {
    pub base_url: String,
    log: CallLog,
}

impl MockBackend {
    pub async fn start() -> Self {
        let log = CallLog::default();
        let app = backend_router().layer(from_fn_with_state(log.clone(), record));

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

    pub fn calls_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method && c.path == path)
            .collect()
    }

    pub fn reset(&self) {
        self.log.0.lock().unwrap().clear();
    }
}

async fn record(State(log): State<CallLog>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    log.0.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        authorization: parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&bytes).ok(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "invalid or missing authentication token"})),
    )
        .into_response()
}

fn bob() -> Value {
    json!({"id": 1, "username": "bob", "email": "bob@example.com", "bio": "Lifter"})
}

fn stored_workout(id: i64) -> Value {
    json!({
        "id": id,
        "user_id": 1,
        "title": "Leg day",
        "description": "Heavy squats",
        "duration_minutes": 45,
        "calories_burned": 300,
        "entries": [{"id": 10, "exercise_name": "Squat", "sets": 5, "reps": 5,
                     "duration_seconds": null, "weight": 100.0, "notes": "", "order_index": 1}]
    })
}

fn backend_router() -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({"status": "available"})) }))
        .route(
            "/tokens/authentication",
            post(|Json(body): Json<Value>| async move {
                if body["username"] == "bob" && body["password"] == "password123" {
                    (
                        StatusCode::CREATED,
                        Json(json!({"auth_token": {"token": GOOD_TOKEN}, "user": bob()})),
                    )
                        .into_response()
                } else {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"error": "invalid credentials"})),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/users",
            post(|Json(body): Json<Value>| async move {
                if body["username"] == "taken" {
                    return (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"error": "username already exists"})),
                    )
                        .into_response();
                }
                let user = json!({
                    "id": 2,
                    "username": body["username"],
                    "email": body["email"],
                    "bio": body["bio"],
                });
                (StatusCode::CREATED, Json(json!({ "user": user }))).into_response()
            }),
        )
        .route(
            "/users/me",
            get(|headers: HeaderMap| async move {
                match bearer(&headers) {
                    Some(GOOD_TOKEN | REVOKED_ON_WRITE_TOKEN | REVOKED_FOR_WORKOUTS_TOKEN) => {
                        Json(json!({"user": bob()})).into_response()
                    }
                    _ => unauthorized(),
                }
            }),
        )
        .route(
            "/workouts/",
            get(|headers: HeaderMap| async move {
                match bearer(&headers) {
                    Some(GOOD_TOKEN) | Some(REVOKED_ON_WRITE_TOKEN) => {
                        Json(json!({"workouts": [stored_workout(3)]})).into_response()
                    }
                    _ => unauthorized(),
                }
            })
            .post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                if bearer(&headers) != Some(GOOD_TOKEN) {
                    return unauthorized();
                }
                // Echo the draft back as the stored workout
                let mut workout = body;
                workout["id"] = json!(7);
                workout["user_id"] = json!(1);
                (StatusCode::CREATED, Json(json!({ "workout": workout }))).into_response()
            }),
        )
        .route(
            "/workouts/{id}",
            get(|headers: HeaderMap, Path(id): Path<i64>| async move {
                if !matches!(
                    bearer(&headers),
                    Some(GOOD_TOKEN | REVOKED_ON_WRITE_TOKEN)
                ) {
                    return unauthorized();
                }
                if id == 3 {
                    Json(json!({"workout": stored_workout(3)})).into_response()
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({"error": "workout not found"})))
                        .into_response()
                }
            })
            .put(
                |headers: HeaderMap, Path(id): Path<i64>, Json(body): Json<Value>| async move {
                    if bearer(&headers) != Some(GOOD_TOKEN) {
                        return unauthorized();
                    }
                    let mut workout = body;
                    workout["id"] = json!(id);
                    Json(json!({ "workout": workout })).into_response()
                },
            )
            .delete(|headers: HeaderMap| async move {
                if bearer(&headers) != Some(GOOD_TOKEN) {
                    return unauthorized();
                }
                Json(json!({"message": "workout successfully deleted"})).into_response()
            }),
        )
}
