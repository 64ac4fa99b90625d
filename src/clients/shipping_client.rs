//! # Shipping Client
//!
//! Quotes shipping before payment and ships the order after it.
use crate::clients::traits::ShippingService;
use crate::model::{Address, CartItem, Money};
use crate::proto;
use crate::proto::convert::cart_items;
use async_trait::async_trait;
use rpc_framework::{Collaborator, RpcClient, RpcError};
use tracing::instrument;

/// Client for the shipping collaborator.
#[derive(Clone, Debug)]
pub struct ShippingClient {
    inner: RpcClient,
}

impl Collaborator for ShippingClient {
    const NAME: &'static str = "shipping";

    fn from_rpc(inner: RpcClient) -> Self {
        Self { inner }
    }

    fn rpc(&self) -> &RpcClient {
        &self.inner
    }
}

#[async_trait]
impl ShippingService for ShippingClient {
    #[instrument(skip_all, fields(items = items.len()))]
    async fn get_quote(&self, address: &Address, items: &[CartItem]) -> Result<Money, RpcError> {
        let request = proto::GetQuoteRequest {
            address: Some(address.into()),
            items: cart_items(items),
        };
        let quote: proto::GetQuoteResponse = self.unary(proto::SHIPPING_GET_QUOTE, request).await?;

        quote
            .cost_usd
            .map(Into::into)
            .ok_or(RpcError::MalformedResponse {
                service: Self::NAME,
                field: "cost_usd",
            })
    }

    #[instrument(skip_all, fields(items = items.len()))]
    async fn ship_order(&self, address: &Address, items: &[CartItem]) -> Result<String, RpcError> {
        let request = proto::ShipOrderRequest {
            address: Some(address.into()),
            items: cart_items(items),
        };
        let response: proto::ShipOrderResponse =
            self.unary(proto::SHIPPING_SHIP_ORDER, request).await?;
        Ok(response.tracking_id)
    }
}
