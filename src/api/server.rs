//! HTTP server: shared state, router construction and lifecycle.

use super::mapper::TaskMapper;
use super::tasks;
use crate::config::HttpConfig;
use crate::db::Database;
use crate::error::TaskResult;
use crate::service::TaskService;
use axum::{Json, Router, extract::State, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared across handlers, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: TaskService,
    pub mapper: TaskMapper,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: TaskService::new(db),
            mapper: TaskMapper::new(),
        }
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    tasks: i64,
}

async fn health(State(state): State<AppState>) -> TaskResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tasks: state.service.count()?,
    }))
}

/// Build the router with all routes.
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    let router = Router::new()
        .merge(tasks::routes())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http());

    let router = if http.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}

/// Handle for a running server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: JoinHandle<()>,
}

impl ServerHandle {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.join.await {
            tracing::error!("Server task failed: {}", e);
        }
    }
}

/// Bind `host:port` and serve the router in a background task.
pub async fn start_server(router: Router, host: &str, port: u16) -> anyhow::Result<ServerHandle> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;

    info!("Task API listening on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let join = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Task API shutting down");
            })
            .await
        {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(ServerHandle {
        addr,
        shutdown_tx: Some(shutdown_tx),
        join,
    })
}
