//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router around the redirect handler
//! - Wire up middleware (tracing, `Server` header)
//! - Serve accepted connections until shutdown

use axum::{
    http::{header, HeaderValue},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::redirect::redirect_handler;
use crate::mirrors::MirrorSet;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = concat!("metalink_server/", env!("CARGO_PKG_VERSION"));

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub mirrors: Arc<MirrorSet>,
}

/// HTTP server answering every request with mirror links.
pub struct MetalinkServer {
    router: Router,
    config: Arc<ServerConfig>,
}

impl MetalinkServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            mirrors: Arc::new(MirrorSet::from_config(&config)),
        };

        let router = Self::build_router(state);
        Self {
            router,
            config: Arc::new(config),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(redirect_handler)
            .with_state(state)
            .layer(SetResponseHeaderLayer::overriding(
                header::SERVER,
                HeaderValue::from_static(SERVER_NAME),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mirrors = self.config.mirrors.len(),
            priority = ?self.config.priority,
            "start serving..."
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
