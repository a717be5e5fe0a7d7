use std::net::SocketAddr;
use std::sync::Arc;

use crate::frameworks::store;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SystemClock};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let store = match store::store_from_env() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "store configuration error");
            return;
        }
    };
    if !store.has_write_token() {
        // Reads still work; guest creation and confirmation will be
        // rejected by the store.
        tracing::warn!("SANITY_API_WRITE_TOKEN is not set, mutations will fail");
    }

    let state = AppState {
        store: Arc::new(store),
        clock: Arc::new(SystemClock),
    };

    // Wire the public API routes.
    let app = routes::app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return;
        }
    };
    tracing::info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
