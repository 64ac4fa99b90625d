//! # Mock Collaborators
//!
//! In-memory stand-ins for every collaborator, built on
//! [`MockEndpoint`](rpc_framework::mock::MockEndpoint). Each mock method records its arguments
//! and answers from its own expectation queue.
//!
//! ```rust
//! use checkout_service::clients::mock::MockCollaborators;
//! use checkout_service::clients::CartService;
//! use checkout_service::model::CartItem;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mocks = MockCollaborators::new();
//!     mocks.cart.get_cart.expect().return_ok(vec![CartItem::new("P1", 2)]);
//!
//!     let collaborators = mocks.collaborators();
//!     let items = collaborators.cart.get_cart("u1").await.unwrap();
//!
//!     assert_eq!(items.len(), 1);
//!     assert_eq!(mocks.cart.get_cart.calls(), vec!["u1".to_string()]);
//!     mocks.verify();
//! }
//! ```

use crate::clients::traits::*;
use crate::clients::Collaborators;
use crate::model::{Address, CartItem, CreditCardInfo, Money, OrderResult, Product};
use async_trait::async_trait;
use rpc_framework::mock::MockEndpoint;
use rpc_framework::RpcError;
use std::sync::Arc;

#[derive(Clone)]
pub struct MockCart {
    pub get_cart: MockEndpoint<String, Vec<CartItem>>,
    pub empty_cart: MockEndpoint<String, ()>,
}

impl Default for MockCart {
    fn default() -> Self {
        Self {
            get_cart: MockEndpoint::new("cart.GetCart"),
            empty_cart: MockEndpoint::new("cart.EmptyCart"),
        }
    }
}

#[async_trait]
impl CartService for MockCart {
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, RpcError> {
        self.get_cart.call(user_id.to_string()).await
    }

    async fn empty_cart(&self, user_id: &str) -> Result<(), RpcError> {
        self.empty_cart.call(user_id.to_string()).await
    }
}

#[derive(Clone)]
pub struct MockCatalog {
    pub get_product: MockEndpoint<String, Product>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self {
            get_product: MockEndpoint::new("catalog.GetProduct"),
        }
    }
}

#[async_trait]
impl ProductCatalogService for MockCatalog {
    async fn get_product(&self, product_id: &str) -> Result<Product, RpcError> {
        self.get_product.call(product_id.to_string()).await
    }
}

#[derive(Clone)]
pub struct MockCurrency {
    /// Records `(from, to_code)`.
    pub convert: MockEndpoint<(Money, String), Money>,
}

impl Default for MockCurrency {
    fn default() -> Self {
        Self {
            convert: MockEndpoint::new("currency.Convert"),
        }
    }
}

#[async_trait]
impl CurrencyService for MockCurrency {
    async fn convert(&self, from: &Money, to_code: &str) -> Result<Money, RpcError> {
        self.convert.call((from.clone(), to_code.to_string())).await
    }
}

#[derive(Clone)]
pub struct MockShipping {
    pub get_quote: MockEndpoint<(Address, Vec<CartItem>), Money>,
    pub ship_order: MockEndpoint<(Address, Vec<CartItem>), String>,
}

impl Default for MockShipping {
    fn default() -> Self {
        Self {
            get_quote: MockEndpoint::new("shipping.GetQuote"),
            ship_order: MockEndpoint::new("shipping.ShipOrder"),
        }
    }
}

#[async_trait]
impl ShippingService for MockShipping {
    async fn get_quote(&self, address: &Address, items: &[CartItem]) -> Result<Money, RpcError> {
        self.get_quote.call((address.clone(), items.to_vec())).await
    }

    async fn ship_order(&self, address: &Address, items: &[CartItem]) -> Result<String, RpcError> {
        self.ship_order.call((address.clone(), items.to_vec())).await
    }
}

#[derive(Clone)]
pub struct MockPayment {
    /// Records `(amount, card)`.
    pub charge: MockEndpoint<(Money, CreditCardInfo), String>,
}

impl Default for MockPayment {
    fn default() -> Self {
        Self {
            charge: MockEndpoint::new("payment.Charge"),
        }
    }
}

#[async_trait]
impl PaymentService for MockPayment {
    async fn charge(&self, amount: &Money, card: &CreditCardInfo) -> Result<String, RpcError> {
        self.charge.call((amount.clone(), card.clone())).await
    }
}

#[derive(Clone)]
pub struct MockEmail {
    /// Records `(email, order)`.
    pub send_order_confirmation: MockEndpoint<(String, OrderResult), ()>,
}

impl Default for MockEmail {
    fn default() -> Self {
        Self {
            send_order_confirmation: MockEndpoint::new("email.SendOrderConfirmation"),
        }
    }
}

#[async_trait]
impl EmailService for MockEmail {
    async fn send_order_confirmation(
        &self,
        email: &str,
        order: &OrderResult,
    ) -> Result<(), RpcError> {
        self.send_order_confirmation
            .call((email.to_string(), order.clone()))
            .await
    }
}

/// One mock per collaborator. Handles stay connected to the [`Collaborators`] they produce.
#[derive(Clone, Default)]
pub struct MockCollaborators {
    pub cart: MockCart,
    pub catalog: MockCatalog,
    pub currency: MockCurrency,
    pub shipping: MockShipping,
    pub payment: MockPayment,
    pub email: MockEmail,
}

impl MockCollaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            cart: Arc::new(self.cart.clone()),
            catalog: Arc::new(self.catalog.clone()),
            currency: Arc::new(self.currency.clone()),
            shipping: Arc::new(self.shipping.clone()),
            payment: Arc::new(self.payment.clone()),
            email: Arc::new(self.email.clone()),
        }
    }

    /// Verifies that every queued expectation was consumed.
    pub fn verify(&self) {
        self.cart.get_cart.verify();
        self.cart.empty_cart.verify();
        self.catalog.get_product.verify();
        self.currency.convert.verify();
        self.shipping.get_quote.verify();
        self.shipping.ship_order.verify();
        self.payment.charge.verify();
        self.email.send_order_confirmation.verify();
    }
}
