//! Server side of `hipstershop.CheckoutService`.
//!
//! Implement [`checkout_service_server::CheckoutService`] and wrap it in
//! [`checkout_service_server::CheckoutServiceServer`] to mount it on a `tonic` server.

pub mod checkout_service_server {
    use crate::proto::{PlaceOrderRequest, PlaceOrderResponse};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::task::{Context, Poll};
    use tonic::codegen::{http, Body, BoxFuture, Service, StdError};

    pub const SERVICE_NAME: &str = "hipstershop.CheckoutService";
    const PLACE_ORDER: &str = "/hipstershop.CheckoutService/PlaceOrder";

    /// The inbound checkout API.
    #[async_trait]
    pub trait CheckoutService: Send + Sync + 'static {
        async fn place_order(
            &self,
            request: tonic::Request<PlaceOrderRequest>,
        ) -> Result<tonic::Response<PlaceOrderResponse>, tonic::Status>;
    }

    /// Routes `hipstershop.CheckoutService` requests to a [`CheckoutService`] implementation.
    #[derive(Debug)]
    pub struct CheckoutServiceServer<T> {
        inner: Arc<T>,
    }

    impl<T> CheckoutServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }

        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T> Clone for CheckoutServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    struct PlaceOrderSvc<T>(Arc<T>);

    impl<T: CheckoutService> tonic::server::UnaryService<PlaceOrderRequest> for PlaceOrderSvc<T> {
        type Response = PlaceOrderResponse;
        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

        fn call(&mut self, request: tonic::Request<PlaceOrderRequest>) -> Self::Future {
            let inner = Arc::clone(&self.0);
            Box::pin(async move { inner.place_order(request).await })
        }
    }

    impl<T, B> Service<http::Request<B>> for CheckoutServiceServer<T>
    where
        T: CheckoutService,
        B: Body + Send + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                PLACE_ORDER => {
                    let inner = self.inner.clone();
                    Box::pin(async move {
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        Ok(grpc.unary(PlaceOrderSvc(inner), req).await)
                    })
                }
                path => {
                    let status = tonic::Status::unimplemented(format!("unknown method {path}"));
                    Box::pin(async move { Ok(status.into_http()) })
                }
            }
        }
    }

    impl<T> tonic::server::NamedService for CheckoutServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
