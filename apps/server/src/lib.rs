//! # Herald Server
//!
//! HTTP front for the messaging slice, built on `Axum`.
//!
//! | Path | Sender |
//! |---|---|
//! | `GET /api/primary/send` | the primary sender (email) |
//! | `GET /api/qualifier/send` | the sender named by `messaging.qualifier` (SMS by default) |
//!
//! Both reply `Message sent!`; the chosen channel writes one line to stdout.
//!
//! ## Example
//! ```no_run
//! use herald_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder().port(8080).build()?.run().await
//! }
//! ```

pub mod router;

use anyhow::{Context, Result, anyhow};
use axum_server::Handle;
use herald::domain::config::ApiConfig;
use herald::features::messaging::{Console, StdoutConsole};
use herald::kernel::server::ApiState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
    console: Option<Arc<dyn Console>>,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Overrides where message channels write (stdout by default).
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    /// Wires the feature slices and builds the shared state.
    ///
    /// Sender resolution happens here, so a misconfigured qualifier stops the server
    /// before it binds a socket.
    ///
    /// # Errors
    /// Returns an error if any slice fails to initialize (unknown qualifier, ambiguous or
    /// missing primary sender) or the API state cannot be assembled.
    pub fn build(self) -> Result<Server> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, qualifier = %self.cfg.messaging.qualifier, "Initializing server");

        let console = self.console.unwrap_or_else(|| Arc::new(StdoutConsole));
        let slices = herald::init(&self.cfg, console)
            .map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let state = ApiState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully wired server, ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves HTTP until Ctrl+C or SIGTERM, then drains connections for up to 30 s.
    ///
    /// # Errors
    /// Returns an error if the listener cannot bind or the server fails while running.
    pub async fn run(self) -> Result<()> {
        let cfg = &self.state.config;
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let app = router::init(self.state.clone());

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
