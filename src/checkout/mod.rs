//! Order preparation and the `PlaceOrder` pipeline.

pub mod error;
pub mod orchestrator;
pub mod prepare;
mod service;

pub use error::{CheckoutError, PrepareError};
pub use orchestrator::{order_total, Checkout};
pub use prepare::{prepare_order_items_and_shipping_quote, OrderPrep, PricingMode};
