use axum::Router;
use std::io;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Serves `app` on `0.0.0.0:port`. The handle resolves with the server's
/// I/O error, such as a port that is already taken.
pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<io::Result<()>> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .inspect_err(|e| tracing::error!("HTTP server on {} stopped: {}", addr, e))
    })
}

pub(crate) fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!("workout_web=trace,workout_web_axum=trace,{app_name}=trace,info").into()
        }

        #[cfg(not(debug_assertions))]
        {
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(debug_assertions)]
    tracing::info!("Debug build: detailed logs for the workout crates by default");
    tracing::info!("Set RUST_LOG to change verbosity, e.g. RUST_LOG=debug ./workout-server");
}
