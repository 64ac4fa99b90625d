//! # Checkout Service
//!
//! Places an order by coordinating six independently owned collaborators (cart, product
//! catalog, currency, shipping, payment, email) into one business transaction, without a
//! distributed transaction coordinator.
//!
//! ## 🗺️ Module Tour
//!
//! - **[`model`]**: Pure data ([`Money`](model::Money), cart lines, customer data, the
//!   [`OrderResult`](model::OrderResult)). Money arithmetic is exact integer arithmetic.
//! - **[`proto`]**: `hipstershop` protobuf messages, wire conversions and the inbound
//!   `CheckoutService` server glue.
//! - **[`clients`]**: One adapter per collaborator, the traits checkout depends on, and mocks
//!   of those traits for tests.
//! - **[`checkout`]**: Order preparation and the `PlaceOrder` pipeline.
//! - **[`lifecycle`]**: Configuration and wiring of the running service.
//!
//! ## Failure Policy
//!
//! | Step | On failure |
//! |---|---|
//! | cart, catalog, currency, shipping quote | `INTERNAL`, nothing charged |
//! | payment | `INTERNAL`, nothing charged |
//! | ship | `UNAVAILABLE`, **card stays charged** |
//! | empty cart, confirmation email | logged, order still succeeds |
//!
//! No step retries and nothing is compensated. Calling `PlaceOrder` twice charges twice.
//!
//! ## 🧪 Testing
//!
//! See [`clients::mock::MockCollaborators`] for driving the orchestrator without a network.

pub mod checkout;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod proto;
