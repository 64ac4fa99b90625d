//! # Currency Client
use crate::clients::traits::CurrencyService;
use crate::model::Money;
use crate::proto;
use async_trait::async_trait;
use rpc_framework::{Collaborator, RpcClient, RpcError};
use tracing::instrument;

/// Client for the currency conversion collaborator.
#[derive(Clone, Debug)]
pub struct CurrencyClient {
    inner: RpcClient,
}

impl Collaborator for CurrencyClient {
    const NAME: &'static str = "currency";

    fn from_rpc(inner: RpcClient) -> Self {
        Self { inner }
    }

    fn rpc(&self) -> &RpcClient {
        &self.inner
    }
}

#[async_trait]
impl CurrencyService for CurrencyClient {
    #[instrument(skip(self, from), fields(from = %from))]
    async fn convert(&self, from: &Money, to_code: &str) -> Result<Money, RpcError> {
        let request = proto::CurrencyConversionRequest {
            from: Some(from.into()),
            to_code: to_code.to_string(),
        };
        let converted: proto::Money = self.unary(proto::CURRENCY_CONVERT, request).await?;
        Ok(converted.into())
    }
}
