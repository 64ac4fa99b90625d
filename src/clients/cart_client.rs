//! # Cart Client
//!
//! Reads a user's cart and empties it after a successful checkout.
use crate::clients::traits::CartService;
use crate::model::CartItem;
use crate::proto;
use async_trait::async_trait;
use rpc_framework::{Collaborator, RpcClient, RpcError};
use tracing::instrument;

/// Client for the cart collaborator.
#[derive(Clone, Debug)]
pub struct CartClient {
    inner: RpcClient,
}

impl Collaborator for CartClient {
    const NAME: &'static str = "cart";

    fn from_rpc(inner: RpcClient) -> Self {
        Self { inner }
    }

    fn rpc(&self) -> &RpcClient {
        &self.inner
    }
}

#[async_trait]
impl CartService for CartClient {
    #[instrument(skip(self))]
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, RpcError> {
        let request = proto::GetCartRequest {
            user_id: user_id.to_string(),
        };
        let cart: proto::Cart = self.unary(proto::CART_GET_CART, request).await?;

        cart.items
            .into_iter()
            .map(|item| {
                CartItem::try_from(item).map_err(|proto::InvalidField(field)| {
                    RpcError::MalformedResponse {
                        service: Self::NAME,
                        field,
                    }
                })
            })
            .collect()
    }

    #[instrument(skip(self))]
    async fn empty_cart(&self, user_id: &str) -> Result<(), RpcError> {
        let request = proto::EmptyCartRequest {
            user_id: user_id.to_string(),
        };
        let _: proto::Empty = self.unary(proto::CART_EMPTY_CART, request).await?;
        Ok(())
    }
}
