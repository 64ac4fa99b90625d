//! # Email Client
use crate::clients::traits::EmailService;
use crate::model::OrderResult;
use crate::proto;
use async_trait::async_trait;
use rpc_framework::{Collaborator, RpcClient, RpcError};
use tracing::instrument;

/// Client for the email collaborator.
#[derive(Clone, Debug)]
pub struct EmailClient {
    inner: RpcClient,
}

impl Collaborator for EmailClient {
    const NAME: &'static str = "email";

    fn from_rpc(inner: RpcClient) -> Self {
        Self { inner }
    }

    fn rpc(&self) -> &RpcClient {
        &self.inner
    }
}

#[async_trait]
impl EmailService for EmailClient {
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    async fn send_order_confirmation(
        &self,
        email: &str,
        order: &OrderResult,
    ) -> Result<(), RpcError> {
        let request = proto::SendOrderConfirmationRequest {
            email: email.to_string(),
            order: Some(order.into()),
        };
        let _: proto::Empty = self
            .unary(proto::EMAIL_SEND_ORDER_CONFIRMATION, request)
            .await?;
        Ok(())
    }
}
