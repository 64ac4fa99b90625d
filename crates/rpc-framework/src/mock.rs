//! # Mock Endpoints & Testing Guide
//!
//! [`MockEndpoint<Req, Resp>`] stands in for one collaborator method. It records every
//! request it receives and answers from a queue of expectations, so orchestration logic can
//! be tested without a network or a running collaborator.
//!
//! ## When to use Mocks vs a Real Collaborator
//!
//! | Feature | MockEndpoint | Real Collaborator |
//! |---------|--------------|-------------------|
//! | **Speed** | Instant (in-memory) | Network round trip |
//! | **Determinism** | Answers in queue order | Subject to the remote service |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs a misbehaving service) |
//! | **Cancellation** | `hang()` never answers | Needs a slow service |
//!
//! ## Example
//!
//! ```rust
//! use rpc_framework::mock::MockEndpoint;
//! use rpc_framework::RpcError;
//! use tonic::Code;
//!
//! #[tokio::main]
//! async fn main() {
//!     let charge = MockEndpoint::<u64, String>::new("payment.Charge");
//!     charge.expect().return_ok("tx-1".to_string());
//!     charge
//!         .expect()
//!         .return_err(RpcError::rejected("payment", Code::InvalidArgument, "card declined"));
//!
//!     assert_eq!(charge.call(100).await.unwrap(), "tx-1");
//!     assert!(charge.call(200).await.is_err());
//!
//!     assert_eq!(charge.calls(), vec![100, 200]);
//!     charge.verify();
//! }
//! ```
//!
//! A request arriving with no expectation left panics: an unexpected call is a test failure.

use crate::error::RpcError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Expectation<Resp> {
    Respond(Result<Resp, RpcError>),
    Hang,
}

/// A scripted stand-in for one collaborator method.
///
/// Clones share the same expectation queue and call log, so a test can keep one handle
/// while the code under test owns another.
pub struct MockEndpoint<Req, Resp> {
    method: &'static str,
    expectations: Arc<Mutex<VecDeque<Expectation<Resp>>>>,
    calls: Arc<Mutex<Vec<Req>>>,
}

impl<Req, Resp> Clone for MockEndpoint<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            expectations: self.expectations.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<Req, Resp> MockEndpoint<Req, Resp> {
    /// Creates an endpoint with no expectations. `method` only appears in panic messages.
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues the answer for the next unanswered call.
    pub fn expect(&self) -> ExpectationBuilder<Resp> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Records `request` and answers with the next queued expectation.
    pub async fn call(&self, request: Req) -> Result<Resp, RpcError> {
        self.calls.lock().unwrap().push(request);
        let expectation = self.expectations.lock().unwrap().pop_front();

        match expectation {
            Some(Expectation::Respond(response)) => response,
            Some(Expectation::Hang) => std::future::pending().await,
            None => panic!("Unexpected {} request: no expectation left", self.method),
        }
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Requests received so far, in arrival order.
    pub fn calls(&self) -> Vec<Req>
    where
        Req: Clone,
    {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!(
                "Not all {} expectations were met. {} remaining",
                self.method, remaining
            );
        }
    }
}

/// Builder for one queued answer.
pub struct ExpectationBuilder<Resp> {
    expectations: Arc<Mutex<VecDeque<Expectation<Resp>>>>,
}

impl<Resp> ExpectationBuilder<Resp> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, response: Resp) {
        self.push(Expectation::Respond(Ok(response)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RpcError) {
        self.push(Expectation::Respond(Err(error)));
    }

    /// Sets the expectation to never answer, like a collaborator that stopped responding.
    pub fn hang(self) {
        self.push(Expectation::Hang);
    }

    fn push(self, expectation: Expectation<Resp>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
