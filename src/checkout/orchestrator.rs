//! # Checkout Orchestrator
//!
//! `place_order` runs one linear pipeline per request:
//!
//! ```text
//! order id -> prepare -> total -> charge -> ship -> empty cart* -> result -> email* -> respond
//! ```
//!
//! Steps marked `*` are best-effort: their failures are logged and the order still succeeds.
//! Every other failure ends the request at that step. Earlier steps are never undone, so a
//! failed shipment leaves the card charged.

use crate::checkout::prepare::{prepare_order_items_and_shipping_quote, OrderPrep, PricingMode};
use crate::checkout::CheckoutError;
use crate::clients::Collaborators;
use crate::model::{CheckoutRequest, Money, MoneyError, OrderResult};
use tracing::{error, info, instrument, warn, Span};
use uuid::Uuid;

/// Places orders against a fixed set of collaborators.
///
/// Cheap to clone and safe to share; each call to [`Checkout::place_order`] owns its own state.
#[derive(Clone)]
pub struct Checkout {
    collaborators: Collaborators,
    pricing: PricingMode,
}

impl Checkout {
    pub fn new(collaborators: Collaborators, pricing: PricingMode) -> Self {
        Self {
            collaborators,
            pricing,
        }
    }

    pub fn pricing(&self) -> PricingMode {
        self.pricing
    }

    /// Charges the customer for their cart, ships it and returns the placed order.
    ///
    /// Dropping the returned future cancels the in-flight collaborator call and nothing after
    /// it runs. Nothing already done is reversed.
    #[instrument(
        name = "place_order",
        skip_all,
        fields(
            user_id = %request.user_id,
            user_currency = %request.user_currency,
            order_id = tracing::field::Empty,
        )
    )]
    pub async fn place_order(&self, request: CheckoutRequest) -> Result<OrderResult, CheckoutError> {
        info!("Placing order");

        let order_id = Uuid::new_v4().to_string();
        Span::current().record("order_id", order_id.as_str());

        let prep = prepare_order_items_and_shipping_quote(
            &self.collaborators,
            self.pricing,
            &request.user_id,
            &request.user_currency,
            &request.address,
        )
        .await
        .inspect_err(|e| warn!(error = %e, "Order preparation failed"))?;

        let total = order_total(&request.user_currency, &prep).map_err(|e| {
            error!(error = %e, "Order total could not be computed from prepared amounts");
            CheckoutError::Total(e)
        })?;

        let transaction_id = self
            .collaborators
            .payment
            .charge(&total, &request.credit_card)
            .await
            .map_err(|e| {
                warn!(error = %e, "Charge failed");
                CheckoutError::Charge(e)
            })?;
        info!(transaction_id = %transaction_id, total = %total, "Payment went through");

        let shipping_tracking_id = self
            .collaborators
            .shipping
            .ship_order(&request.address, &prep.cart_items)
            .await
            .map_err(|e| {
                error!(
                    transaction_id = %transaction_id,
                    error = %e,
                    "Shipping failed after charge, no refund issued"
                );
                CheckoutError::Ship(e)
            })?;
        info!(tracking_id = %shipping_tracking_id, "Order shipped");

        if let Err(e) = self.collaborators.cart.empty_cart(&request.user_id).await {
            warn!(error = %e, "Failed to empty user's cart");
        }

        let order = OrderResult {
            order_id,
            shipping_tracking_id,
            shipping_cost: prep.shipping_cost_localized,
            shipping_address: request.address,
            items: prep.order_items,
        };

        match self
            .collaborators
            .email
            .send_order_confirmation(&request.email, &order)
            .await
        {
            Ok(()) => info!("Order confirmation sent"),
            Err(e) => warn!(error = %e, "Failed to send order confirmation"),
        }

        Ok(order)
    }
}

/// Localized shipping cost plus every order item's cost, starting from zero in
/// `user_currency`.
pub fn order_total(user_currency: &str, prep: &OrderPrep) -> Result<Money, MoneyError> {
    let with_shipping = Money::zero(user_currency).sum(&prep.shipping_cost_localized)?;
    prep.order_items
        .iter()
        .try_fold(with_shipping, |total, item| total.sum(&item.cost))
}
