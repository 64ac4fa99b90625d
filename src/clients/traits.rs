//! The contract checkout expects from each collaborator.
//!
//! The orchestrator only sees these traits; production wires in the gRPC adapters, tests wire
//! in [`crate::clients::mock`].

use crate::model::{Address, CartItem, CreditCardInfo, Money, OrderResult, Product};
use async_trait::async_trait;
use rpc_framework::RpcError;

#[async_trait]
pub trait CartService: Send + Sync {
    /// Items in the user's cart, in cart order.
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, RpcError>;

    async fn empty_cart(&self, user_id: &str) -> Result<(), RpcError>;
}

#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn get_product(&self, product_id: &str) -> Result<Product, RpcError>;
}

#[async_trait]
pub trait CurrencyService: Send + Sync {
    async fn convert(&self, from: &Money, to_code: &str) -> Result<Money, RpcError>;
}

#[async_trait]
pub trait ShippingService: Send + Sync {
    /// Shipping cost in USD.
    async fn get_quote(&self, address: &Address, items: &[CartItem]) -> Result<Money, RpcError>;

    /// Tracking identifier of the shipment.
    async fn ship_order(&self, address: &Address, items: &[CartItem]) -> Result<String, RpcError>;
}

#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Transaction identifier of the charge.
    async fn charge(&self, amount: &Money, card: &CreditCardInfo) -> Result<String, RpcError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send_order_confirmation(&self, email: &str, order: &OrderResult)
        -> Result<(), RpcError>;
}
