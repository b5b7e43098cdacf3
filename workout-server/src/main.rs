use dotenvy::dotenv;

use workout_web_axum::{AppState, workout_web_router};

mod server;
use server::{init_tracing, spawn_http_server};

const DEFAULT_PORT: u16 = 3000;

fn port_from_env() -> u16 {
    match std::env::var("PORT") {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid PORT {:?}, using {}", value, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing("workout_server");

    let state = AppState::from_env()?;
    tracing::info!("Using backend API at {}", state.gateway.base_url());

    let app = workout_web_router(state);

    spawn_http_server(port_from_env(), app).await??;
    Ok(())
}
