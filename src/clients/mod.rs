//! Collaborator adapters: one gRPC client per downstream service, the traits checkout
//! depends on, and in-memory mocks of those traits.

pub mod cart_client;
pub mod currency_client;
pub mod email_client;
pub mod mock;
pub mod payment_client;
pub mod product_client;
pub mod shipping_client;
pub mod traits;

pub use cart_client::*;
pub use currency_client::*;
pub use email_client::*;
pub use payment_client::*;
pub use product_client::*;
pub use shipping_client::*;
pub use traits::*;

use std::sync::Arc;

/// The collaborators one checkout talks to.
///
/// Built once at startup and shared by every request; cloning only bumps reference counts.
#[derive(Clone)]
pub struct Collaborators {
    pub cart: Arc<dyn CartService>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub currency: Arc<dyn CurrencyService>,
    pub shipping: Arc<dyn ShippingService>,
    pub payment: Arc<dyn PaymentService>,
    pub email: Arc<dyn EmailService>,
}
