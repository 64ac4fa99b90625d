//! Error types for order preparation and checkout.

use crate::model::MoneyError;
use rpc_framework::RpcError;
use thiserror::Error;

/// Why order preparation failed. Each variant names the stage, so logs tell which
/// collaborator held up a checkout even though callers only see one status class.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("cart failure: {0}")]
    Cart(#[source] RpcError),

    #[error("failed to get product {product_id:?}: {source}")]
    Product {
        product_id: String,
        #[source]
        source: RpcError,
    },

    #[error("failed to price {product_id:?}: {source}")]
    Pricing {
        product_id: String,
        #[source]
        source: MoneyError,
    },

    #[error("failed to convert price of {product_id:?}: {source}")]
    Conversion {
        product_id: String,
        #[source]
        source: RpcError,
    },

    #[error("shipping quote failure: {0}")]
    ShippingQuote(#[source] RpcError),

    #[error("failed to convert shipping cost to currency: {0}")]
    ShippingConversion(#[source] RpcError),

    /// The currency collaborator answered in a currency nobody asked for.
    #[error("currency service returned {actual} instead of {expected}")]
    UnexpectedCurrency { expected: String, actual: String },
}

/// Why a checkout failed. Nothing after the failing step ran; nothing before it was undone.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("failed to prepare order: {0}")]
    Prepare(#[from] PrepareError),

    /// Prepared amounts could not be added up. Preparation guarantees a single currency, so
    /// this is a defect, not a user error.
    #[error("failed to compute order total: {0}")]
    Total(#[source] MoneyError),

    #[error("failed to charge card: {0}")]
    Charge(#[source] RpcError),

    /// Raised after the card was charged; the charge stands.
    #[error("shipping error: {0}")]
    Ship(#[source] RpcError),
}

impl From<CheckoutError> for tonic::Status {
    fn from(e: CheckoutError) -> Self {
        match e {
            CheckoutError::Ship(_) => tonic::Status::unavailable(e.to_string()),
            CheckoutError::Prepare(_) | CheckoutError::Total(_) | CheckoutError::Charge(_) => {
                tonic::Status::internal(e.to_string())
            }
        }
    }
}
