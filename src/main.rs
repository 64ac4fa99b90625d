use anyhow::Context;
use checkout_service::lifecycle::{CheckoutSystem, Config};
use rpc_framework::tracing::setup_tracing;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    let system = CheckoutSystem::connect(&config).context("failed to build collaborator clients")?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    system
        .serve(addr, shutdown_signal())
        .await
        .context("checkout server failed")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
    }
}
