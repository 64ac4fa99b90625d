//! # Collaborator Trait
//!
//! Provides a common interface for collaborator-specific adapters: a name, access to the
//! shared [`RpcClient`], and a provided `unary` call that tags every failure with that name.
use crate::{RpcClient, RpcError};
use async_trait::async_trait;
use std::time::Duration;
use tonic::Status;

/// Trait for collaborator adapters to inherit connection setup and error mapping.
///
/// # Example
///
/// ```rust,no_run
/// use rpc_framework::{Collaborator, RpcClient, RpcError};
///
/// #[derive(prost::Message)]
/// struct PingRequest {}
/// #[derive(prost::Message)]
/// struct PingResponse {}
///
/// struct PingClient {
///     inner: RpcClient,
/// }
///
/// impl Collaborator for PingClient {
///     const NAME: &'static str = "ping";
///
///     fn from_rpc(inner: RpcClient) -> Self {
///         Self { inner }
///     }
///
///     fn rpc(&self) -> &RpcClient {
///         &self.inner
///     }
/// }
///
/// async fn usage(client: PingClient) -> Result<(), RpcError> {
///     let _: PingResponse = client.unary("/demo.PingService/Ping", PingRequest {}).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Short collaborator name used in errors and log fields (e.g. `"cart"`).
    const NAME: &'static str;

    /// Wraps an already built client.
    fn from_rpc(inner: RpcClient) -> Self
    where
        Self: Sized;

    /// Access the shared transport.
    fn rpc(&self) -> &RpcClient;

    /// Builds the adapter with a lazily connected channel to `address`.
    fn connect_lazy(address: &str, connect_timeout: Duration) -> Result<Self, RpcError>
    where
        Self: Sized,
    {
        RpcClient::connect_lazy(address, connect_timeout)
            .map(Self::from_rpc)
            .map_err(|e| RpcError::InvalidAddress {
                service: Self::NAME,
                address: address.to_string(),
                message: e.to_string(),
            })
    }

    /// Map a transport status to this collaborator's error.
    fn map_status(status: Status) -> RpcError
    where
        Self: Sized,
    {
        RpcError::from_status(Self::NAME, status)
    }

    /// Issue one unary call, tagging any failure with [`Collaborator::NAME`].
    async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, RpcError>
    where
        Self: Sized,
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        tracing::debug!(collaborator = Self::NAME, path, "Sending request");
        match self.rpc().unary(path, request).await {
            Ok(response) => Ok(response),
            Err(status) => {
                let error = Self::map_status(status);
                tracing::debug!(collaborator = Self::NAME, path, error = %error, "Request failed");
                Err(error)
            }
        }
    }
}
