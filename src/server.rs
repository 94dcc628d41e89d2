//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, listener binding, the Axum server lifecycle and
//! graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::StoreHandle;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// An HTTP server bound to a listener and serving one application state.
///
/// Binding happens in [`Server::bind`] so the caller learns the real address
/// (useful with port `0`) before traffic is served.
pub struct Server {
    listener: TcpListener,
    state: AppState,
}

impl Server {
    /// Binds `addr` and prepares to serve `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed or cannot be bound.
    pub async fn bind(addr: &str, state: AppState) -> Result<Self> {
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("Invalid listen address '{}'", addr))?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        Ok(Self::from_listener(listener, state))
    }

    /// Wraps an already bound listener.
    pub fn from_listener(listener: TcpListener, state: AppState) -> Self {
        Self { listener, state }
    }

    /// Address the server accepts connections on.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Failed to read local address")
    }

    /// Serves requests until `shutdown` resolves.
    ///
    /// Once `shutdown` resolves no new connections are accepted. In-flight
    /// requests get up to `grace` to complete; after that the server stops
    /// waiting and returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the accept loop fails.
    pub async fn serve<F>(self, shutdown: F, grace: Duration) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        let app = app_router(self.state);

        let (stopping_tx, mut stopping_rx) = oneshot::channel::<()>();
        let signal = async move {
            shutdown.await;
            tracing::info!("Shutdown requested, draining in-flight requests");
            let _ = stopping_tx.send(());
        };

        tracing::info!("Listening on http://{addr}");

        let server = axum::serve(
            self.listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(signal)
        .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => result.context("Server error")?,
            Ok(()) = &mut stopping_rx => {
                match tokio::time::timeout(grace, &mut server).await {
                    Ok(result) => result.context("Server error")?,
                    Err(_) => tracing::warn!(
                        "Grace period of {:?} elapsed, abandoning in-flight requests",
                        grace
                    ),
                }
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C, or on SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured record store (MongoDB connection failures are fatal)
/// - Axum HTTP server
///
/// Stops on Ctrl+C/SIGTERM, then closes the store.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = StoreHandle::open(&config).await?;
    let state = AppState::new(store.store());

    let served = match Server::bind(&config.listen_addr, state).await {
        Ok(server) => {
            server
                .serve(shutdown_signal(), config.shutdown_grace())
                .await
        }
        Err(e) => Err(e),
    };

    store.close().await;
    served
}
