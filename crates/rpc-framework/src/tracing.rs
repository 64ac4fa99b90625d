//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole service.
//!
//! Every collaborator call and every checkout step logs through `tracing` inside the span of
//! the request that caused it, so concurrent checkouts never interleave their context:
//!
//! ```text
//! INFO place_order{user_id="u1" user_currency="EUR" order_id="6f1c..."}: Payment went through transaction_id="tx-1"
//! WARN place_order{user_id="u1" user_currency="EUR" order_id="6f1c..."}: Failed to empty user's cart error=...
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Default: info
//! cargo run
//!
//! # Show every outbound request
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=checkout_service::checkout=debug,rpc_framework=debug cargo run
//! ```
//!
//! Credit card data is never recorded: the card types only print a redacted `Debug` form.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false) // Span names already say where an event came from
        .compact()
        .init();
}
