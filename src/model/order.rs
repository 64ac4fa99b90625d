use crate::model::{Address, CreditCardInfo, Money, OrderItem};

/// Everything the caller supplies to place an order.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub user_id: String,
    /// Currency every amount in the result is expressed in.
    pub user_currency: String,
    pub address: Address,
    pub email: String,
    pub credit_card: CreditCardInfo,
}

/// A placed order, returned to the caller and sent in the confirmation email.
///
/// Checkout does not store it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    pub order_id: String,
    pub shipping_tracking_id: String,
    pub shipping_cost: Money,
    pub shipping_address: Address,
    pub items: Vec<OrderItem>,
}
