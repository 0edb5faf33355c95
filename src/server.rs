//! HTTP API server lifecycle.
//!
//! [`Server`] builds the shared [`RpcClient`] once from configuration, binds the
//! listener and serves the router until Ctrl+C is received.
//!
//! ```ignore
//! use polygon_gateway::{config::GatewayConfig, server::Server};
//!
//! # async fn example() -> anyhow::Result<()> {
//! Server::new(GatewayConfig::default()).run().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use anyhow::Context;
use log::{error, info};
use tokio::{net::TcpListener, signal};

use crate::{api, config::GatewayConfig, log::mask_url, rpc::RpcClient};

pub struct Server {
    config: GatewayConfig,
}

impl Server {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Runs the API server until a shutdown signal is received.
    ///
    /// # Errors
    ///
    /// Fails if the RPC URL is invalid, the HTTP client cannot be built, or the
    /// listen address cannot be bound.
    pub async fn run(&self) -> anyhow::Result<()> {
        let endpoint = self.config.rpc_endpoint()?;
        info!(endpoint = &*mask_url(&endpoint); "Using upstream node");

        let rpc_client =
            RpcClient::with_timeout(endpoint, self.config.rpc_timeout()).context("Failed to build RPC client")?;
        let router = api::create_router(Arc::new(rpc_client));

        let addr = self.config.listen_address();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind API server to {}", addr))?;

        info!(address = &*addr; "API server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("API server terminated unexpectedly")?;

        info!("API server stopped gracefully.");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error:% = e; "Failed to listen for ctrl_c, shutdown must be forced");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping API server...");
}
