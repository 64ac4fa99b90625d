//! # Product Catalog Client
use crate::clients::traits::ProductCatalogService;
use crate::model::Product;
use crate::proto;
use async_trait::async_trait;
use rpc_framework::{Collaborator, RpcClient, RpcError};
use tracing::instrument;

/// Client for the product catalog collaborator.
#[derive(Clone, Debug)]
pub struct ProductCatalogClient {
    inner: RpcClient,
}

impl Collaborator for ProductCatalogClient {
    const NAME: &'static str = "product catalog";

    fn from_rpc(inner: RpcClient) -> Self {
        Self { inner }
    }

    fn rpc(&self) -> &RpcClient {
        &self.inner
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogClient {
    #[instrument(skip(self))]
    async fn get_product(&self, product_id: &str) -> Result<Product, RpcError> {
        let request = proto::GetProductRequest {
            id: product_id.to_string(),
        };
        let product: proto::Product = self.unary(proto::CATALOG_GET_PRODUCT, request).await?;

        Product::try_from(product).map_err(|proto::InvalidField(field)| {
            RpcError::MalformedResponse {
                service: Self::NAME,
                field,
            }
        })
    }
}
