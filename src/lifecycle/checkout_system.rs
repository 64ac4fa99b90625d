use crate::checkout::{Checkout, PricingMode};
use crate::clients::{
    CartClient, Collaborators, CurrencyClient, EmailClient, PaymentClient, ProductCatalogClient,
    ShippingClient,
};
use crate::lifecycle::Config;
use crate::proto::checkout_service_server::CheckoutServiceServer;
use rpc_framework::{Collaborator, RpcError};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// The running checkout service: one orchestrator over long-lived collaborator clients.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let system = CheckoutSystem::connect(&config)?;
/// system.serve(addr, tokio::signal::ctrl_c()).await?;
/// ```
pub struct CheckoutSystem {
    pub checkout: Checkout,
}

impl CheckoutSystem {
    /// Builds one client per collaborator. Channels connect lazily, so this never waits on
    /// the network; an address that cannot form a URI fails here.
    pub fn connect(config: &Config) -> Result<Self, RpcError> {
        let timeout = config.connect_timeout;
        let addrs = &config.addrs;
        let collaborators = Collaborators {
            cart: Arc::new(CartClient::connect_lazy(&addrs.cart, timeout)?),
            catalog: Arc::new(ProductCatalogClient::connect_lazy(
                &addrs.product_catalog,
                timeout,
            )?),
            currency: Arc::new(CurrencyClient::connect_lazy(&addrs.currency, timeout)?),
            shipping: Arc::new(ShippingClient::connect_lazy(&addrs.shipping, timeout)?),
            payment: Arc::new(PaymentClient::connect_lazy(&addrs.payment, timeout)?),
            email: Arc::new(EmailClient::connect_lazy(&addrs.email, timeout)?),
        };
        info!(?addrs, pricing = ?config.pricing, "Collaborator clients ready");
        Ok(Self::new(collaborators, config.pricing))
    }

    /// Wires already built collaborators, e.g. mocks.
    pub fn new(collaborators: Collaborators, pricing: PricingMode) -> Self {
        Self {
            checkout: Checkout::new(collaborators, pricing),
        }
    }

    /// Serves `hipstershop.CheckoutService` and the gRPC health service on `addr` until
    /// `shutdown` resolves.
    pub async fn serve<F>(self, addr: SocketAddr, shutdown: F) -> Result<(), tonic::transport::Error>
    where
        F: Future<Output = ()> + Send,
    {
        let (health_reporter, health_service) = tonic_health::server::health_reporter();
        health_reporter
            .set_serving::<CheckoutServiceServer<Checkout>>()
            .await;

        info!(%addr, "Checkout service listening");
        tonic::transport::Server::builder()
            .add_service(health_service)
            .add_service(CheckoutServiceServer::new(self.checkout))
            .serve_with_shutdown(addr, shutdown)
            .await?;

        info!("Checkout service stopped");
        Ok(())
    }
}
