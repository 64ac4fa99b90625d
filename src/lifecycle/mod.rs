//! # System Lifecycle
//!
//! Startup configuration and wiring of the checkout service.
//!
//! 1. [`Config`] reads collaborator addresses and tuning knobs from the environment.
//! 2. [`CheckoutSystem::connect`] builds one long-lived client per collaborator and the
//!    [`Checkout`](crate::checkout::Checkout) orchestrator over them.
//! 3. [`CheckoutSystem::serve`] mounts the checkout and health services on a `tonic` server
//!    and runs until the shutdown signal fires.
//!
//! Tests skip step 1 and hand mocked collaborators to [`CheckoutSystem::new`].
//!
//! Logging is initialised once by the binary with
//! [`rpc_framework::tracing::setup_tracing`]; `RUST_LOG` controls the filter.

pub mod checkout_system;
pub mod config;

pub use checkout_system::CheckoutSystem;
pub use config::{Config, ConfigError};
