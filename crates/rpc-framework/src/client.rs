//! # Generic Client
//!
//! This module defines the transport shared by every collaborator adapter.

use std::time::Duration;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;

/// ## RpcClient
///
/// A unary gRPC client bound to one collaborator address. It is built once at startup and
/// shared by every request; `tonic` multiplexes concurrent calls over the same channel.
///
/// * **Lazy** – no connection is attempted until the first call, so startup does not depend
///   on collaborator availability.
/// * **Cheap to clone** – clones share the underlying connection.
/// * **Generic** – requests and responses are any `prost` message pair.
#[derive(Clone, Debug)]
pub struct RpcClient {
    channel: Channel,
}

impl RpcClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// Builds a lazily connected client for `address` (e.g. `http://cartservice:7070`).
    ///
    /// Must be called from within a Tokio runtime.
    pub fn connect_lazy(
        address: &str,
        connect_timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let endpoint = Endpoint::from_shared(address.to_string())?.connect_timeout(connect_timeout);
        Ok(Self::new(endpoint.connect_lazy()))
    }

    /// Issues one unary call on `path` (e.g. `/hipstershop.CartService/GetCart`).
    pub async fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unavailable(format!("channel not ready: {e}")))?;

        let codec = tonic_prost::ProstCodec::<Req, Resp>::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?;
        Ok(response.into_inner())
    }
}
