//! HTTP server implementation using Axum.

use crate::handlers::{handle_health, handle_rpc};
use axum::{
    routing::{get, post},
    Router,
};
use shortcut_core::{OsFileSystem, ShortcutSession};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// The one shortcut being edited
    pub session: RwLock<ShortcutSession>,
    /// Filesystem used for validation and saving
    pub fs: OsFileSystem,
    /// Signalled by the `shutdown` RPC method
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(session: ShortcutSession) -> Self {
        Self {
            session: RwLock::new(session),
            fs: OsFileSystem,
            shutdown: Arc::new(Notify::new()),
        }
    }
}

/// A server running in the background.
pub struct RunningServer {
    /// The address actually bound (useful when port=0)
    pub addr: SocketAddr,
    /// Completes once the server has stopped after a `shutdown` request
    pub task: JoinHandle<()>,
}

/// Build the router serving `/health` and `/rpc`.
pub fn router(state: Arc<AppState>) -> Router {
    // The form UI runs from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // RPC calls run one at a time, in arrival order, like form events
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/rpc",
            post(handle_rpc).layer(GlobalConcurrencyLimitLayer::new(1)),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the JSON-RPC HTTP server.
///
/// The server drains in-flight requests and stops when the `shutdown` method
/// is called.
pub async fn start_server(
    session: ShortcutSession,
    host: &str,
    port: u16,
) -> anyhow::Result<RunningServer> {
    let state = Arc::new(AppState::new(session));
    let shutdown = state.shutdown.clone();
    let app = router(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    let task = tokio::spawn(async move {
        let stop = async move { shutdown.notified().await };
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(stop)
            .await
        {
            error!("Server error: {}", e);
        }
        info!("Server stopped");
    });

    Ok(RunningServer {
        addr: actual_addr,
        task,
    })
}
