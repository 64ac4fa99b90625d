//! `hipstershop.CheckoutService` backed by [`Checkout`].

use crate::checkout::Checkout;
use crate::model::CheckoutRequest;
use crate::proto::checkout_service_server::CheckoutService;
use crate::proto::{PlaceOrderRequest, PlaceOrderResponse};
use async_trait::async_trait;
use tonic::{Request, Response, Status};

#[async_trait]
impl CheckoutService for Checkout {
    async fn place_order(
        &self,
        request: Request<PlaceOrderRequest>,
    ) -> Result<Response<PlaceOrderResponse>, Status> {
        let request = CheckoutRequest::try_from(request.into_inner())?;
        let order = Checkout::place_order(self, request).await?;
        Ok(Response::new(PlaceOrderResponse {
            order: Some((&order).into()),
        }))
    }
}
