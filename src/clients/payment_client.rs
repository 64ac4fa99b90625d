//! # Payment Client
use crate::clients::traits::PaymentService;
use crate::model::{CreditCardInfo, Money};
use crate::proto;
use async_trait::async_trait;
use rpc_framework::{Collaborator, RpcClient, RpcError};
use tracing::instrument;

/// Client for the payment collaborator. The card goes on the wire and nowhere else.
#[derive(Clone, Debug)]
pub struct PaymentClient {
    inner: RpcClient,
}

impl Collaborator for PaymentClient {
    const NAME: &'static str = "payment";

    fn from_rpc(inner: RpcClient) -> Self {
        Self { inner }
    }

    fn rpc(&self) -> &RpcClient {
        &self.inner
    }
}

#[async_trait]
impl PaymentService for PaymentClient {
    #[instrument(skip_all, fields(amount = %amount))]
    async fn charge(&self, amount: &Money, card: &CreditCardInfo) -> Result<String, RpcError> {
        let request = proto::ChargeRequest {
            amount: Some(amount.into()),
            credit_card: Some(card.into()),
        };
        let response: proto::ChargeResponse = self.unary(proto::PAYMENT_CHARGE, request).await?;
        Ok(response.transaction_id)
    }
}
