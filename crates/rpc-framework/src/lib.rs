//! # RPC Framework
//!
//! Building blocks shared by every downstream collaborator adapter of the checkout service.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Transport Layer** ([`RpcClient`]) - one long-lived, lazily connected `tonic` channel per
//!    collaborator, cloned into every call.
//! 2. **Adapter Layer** ([`Collaborator`]) - a collaborator name plus a provided `unary` call that
//!    turns every transport or application failure into an [`RpcError`] naming that collaborator.
//! 3. **Test Layer** ([`mock`]) - scripted in-memory endpoints standing in for collaborator
//!    methods.
//!
//! ## Concurrency Model
//!
//! - Clients are built once at startup and shared by all requests (`Clone` is cheap)
//! - Each request issues its own calls; no state is shared between requests
//! - No retries and no backoff: one call, one answer
//!
//! ## Testing
//!
//! [`mock::MockEndpoint`] records requests and answers from a queue of expectations, including
//! a `hang()` answer for exercising cancellation.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use client::RpcClient;
pub use client_trait::Collaborator;
pub use error::RpcError;
