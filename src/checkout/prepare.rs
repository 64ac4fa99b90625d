//! Order preparation: the read-only phase that gathers the cart, prices each line in the
//! user's currency and quotes shipping, before any money moves.

use crate::checkout::PrepareError;
use crate::clients::Collaborators;
use crate::model::{Address, CartItem, Money, OrderItem};
use futures::future::try_join_all;
use tracing::{debug, instrument};

/// How cart lines are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingMode {
    /// One line after another.
    #[default]
    Sequential,
    /// All lines at once. Result order still follows the cart; the first failure aborts.
    Concurrent,
}

/// Everything gathered for one in-flight checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPrep {
    pub cart_items: Vec<CartItem>,
    /// One per cart item, in cart order, costed in the user's currency.
    pub order_items: Vec<OrderItem>,
    pub shipping_cost_localized: Money,
}

/// Reads the cart, prices every line and quotes shipping, all in `user_currency`.
///
/// Any failure aborts the whole preparation; no partial item list is returned.
#[instrument(skip(collaborators, address))]
pub async fn prepare_order_items_and_shipping_quote(
    collaborators: &Collaborators,
    pricing: PricingMode,
    user_id: &str,
    user_currency: &str,
    address: &Address,
) -> Result<OrderPrep, PrepareError> {
    let cart_items = collaborators
        .cart
        .get_cart(user_id)
        .await
        .map_err(PrepareError::Cart)?;
    debug!(items = cart_items.len(), "Cart fetched");

    let order_items = match pricing {
        PricingMode::Sequential => {
            let mut out = Vec::with_capacity(cart_items.len());
            for item in &cart_items {
                out.push(price_item(collaborators, item, user_currency).await?);
            }
            out
        }
        PricingMode::Concurrent => {
            try_join_all(
                cart_items
                    .iter()
                    .map(|item| price_item(collaborators, item, user_currency)),
            )
            .await?
        }
    };

    let shipping_usd = collaborators
        .shipping
        .get_quote(address, &cart_items)
        .await
        .map_err(PrepareError::ShippingQuote)?;
    let shipping_cost_localized = collaborators
        .currency
        .convert(&shipping_usd, user_currency)
        .await
        .map_err(PrepareError::ShippingConversion)?;
    ensure_currency(&shipping_cost_localized, user_currency)?;

    debug!(shipping = %shipping_cost_localized, "Shipping quoted");
    Ok(OrderPrep {
        cart_items,
        order_items,
        shipping_cost_localized,
    })
}

/// Prices one cart line: USD unit price times quantity, converted to `user_currency`.
async fn price_item(
    collaborators: &Collaborators,
    item: &CartItem,
    user_currency: &str,
) -> Result<OrderItem, PrepareError> {
    let product = collaborators
        .catalog
        .get_product(&item.product_id)
        .await
        .map_err(|source| PrepareError::Product {
            product_id: item.product_id.clone(),
            source,
        })?;

    let line_total_usd =
        product
            .price_usd
            .multiply(item.quantity)
            .map_err(|source| PrepareError::Pricing {
                product_id: item.product_id.clone(),
                source,
            })?;

    let cost = collaborators
        .currency
        .convert(&line_total_usd, user_currency)
        .await
        .map_err(|source| PrepareError::Conversion {
            product_id: item.product_id.clone(),
            source,
        })?;
    ensure_currency(&cost, user_currency)?;

    Ok(OrderItem {
        item: item.clone(),
        cost,
    })
}

fn ensure_currency(money: &Money, expected: &str) -> Result<(), PrepareError> {
    if money.currency_code == expected {
        Ok(())
    } else {
        Err(PrepareError::UnexpectedCurrency {
            expected: expected.to_string(),
            actual: money.currency_code.clone(),
        })
    }
}
