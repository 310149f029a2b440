//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Build the Axum router (`/health` plus a 404 fallback)
//! - Wire up middleware (request ID, tracing)
//! - Own the bound listener: bind → serve → stop
//! - Offer a blocking entry point and a background handle

use std::future::Future;
use std::net::SocketAddr;

use axum::{routing::any, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerConfig;
use crate::http::handlers::{health, not_found, HEALTH_PATH};
use crate::lifecycle::wait_for_signal;
use crate::net::{self, ListenerError};

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Startup failed: the address could not be claimed.
    #[error(transparent)]
    Bind(#[from] ListenerError),

    /// The accept loop failed after startup.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// The background serve task panicked or was cancelled.
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Build the router with all middleware layers.
pub fn router() -> Router {
    Router::new()
        .route(HEALTH_PATH, any(health))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// A health server that has claimed its address and is ready to serve.
///
/// Holds no request state; every response depends only on the path.
pub struct HealthServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl HealthServer {
    /// Bind the configured address. This is the `Stopped → Listening` step.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let (listener, local_addr) = net::bind(&config.listener).await?;

        Ok(Self {
            listener,
            local_addr,
            router: router(),
        })
    }

    /// Bind and serve until the process receives SIGINT or SIGTERM.
    pub async fn start(config: &ServerConfig) -> Result<(), ServerError> {
        Self::bind(config).await?.serve().await
    }

    /// The address actually bound, with the real port when 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until the process receives SIGINT or SIGTERM.
    pub async fn serve(self) -> Result<(), ServerError> {
        self.serve_with_shutdown(wait_for_signal()).await
    }

    /// Serve until `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(address = %self.local_addr, "HTTP server starting");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!(address = %self.local_addr, "HTTP server stopped");
        Ok(())
    }

    /// Serve on a background task; stop it through the returned handle.
    pub fn spawn(self) -> ServerHandle {
        let local_addr = self.local_addr;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(self.serve_with_shutdown(async move {
            // A dropped handle also stops the server.
            let _ = stop_rx.await;
        }));

        ServerHandle {
            local_addr,
            stop_tx,
            task,
        }
    }
}

/// Handle to a server running on a background task.
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<Result<(), ServerError>>,
}

impl ServerHandle {
    /// The address the background server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop serving and wait for the task to finish. `Listening → Stopped`.
    pub async fn stop(self) -> Result<(), ServerError> {
        let _ = self.stop_tx.send(());
        self.task.await?
    }
}
