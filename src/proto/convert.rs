//! Conversions between the domain model and the wire messages.
//!
//! Domain → wire never fails. Wire → domain fails with [`InvalidField`] when a required
//! message field is absent or a value is out of range; callers attach the collaborator name
//! (outbound) or answer `InvalidArgument` (inbound).

use crate::model;
use crate::proto;

/// A required field was missing or held an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing or invalid field `{0}`")]
pub struct InvalidField(pub &'static str);

impl From<InvalidField> for tonic::Status {
    fn from(e: InvalidField) -> Self {
        tonic::Status::invalid_argument(e.to_string())
    }
}

impl From<proto::Money> for model::Money {
    fn from(m: proto::Money) -> Self {
        model::Money::new(m.currency_code, m.units, m.nanos)
    }
}

impl From<&model::Money> for proto::Money {
    fn from(m: &model::Money) -> Self {
        proto::Money {
            currency_code: m.currency_code.clone(),
            units: m.units,
            nanos: m.nanos,
        }
    }
}

impl TryFrom<proto::CartItem> for model::CartItem {
    type Error = InvalidField;

    fn try_from(item: proto::CartItem) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(item.quantity)
            .ok()
            .filter(|&q| q >= 1)
            .ok_or(InvalidField("quantity"))?;
        Ok(model::CartItem::new(item.product_id, quantity))
    }
}

impl From<&model::CartItem> for proto::CartItem {
    fn from(item: &model::CartItem) -> Self {
        proto::CartItem {
            product_id: item.product_id.clone(),
            // Quantities originate from the cart's int32 field.
            quantity: i32::try_from(item.quantity).unwrap_or(i32::MAX),
        }
    }
}

impl TryFrom<proto::Product> for model::Product {
    type Error = InvalidField;

    fn try_from(product: proto::Product) -> Result<Self, Self::Error> {
        let price_usd = product.price_usd.ok_or(InvalidField("price_usd"))?;
        Ok(model::Product {
            id: product.id,
            name: product.name,
            price_usd: price_usd.into(),
        })
    }
}

impl From<proto::Address> for model::Address {
    fn from(a: proto::Address) -> Self {
        model::Address {
            street_address: a.street_address,
            city: a.city,
            state: a.state,
            country: a.country,
            zip_code: a.zip_code,
        }
    }
}

impl From<&model::Address> for proto::Address {
    fn from(a: &model::Address) -> Self {
        proto::Address {
            street_address: a.street_address.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            country: a.country.clone(),
            zip_code: a.zip_code,
        }
    }
}

impl From<proto::CreditCardInfo> for model::CreditCardInfo {
    fn from(c: proto::CreditCardInfo) -> Self {
        model::CreditCardInfo {
            number: c.credit_card_number,
            cvv: c.credit_card_cvv,
            expiration_year: c.credit_card_expiration_year,
            expiration_month: c.credit_card_expiration_month,
        }
    }
}

impl From<&model::CreditCardInfo> for proto::CreditCardInfo {
    fn from(c: &model::CreditCardInfo) -> Self {
        proto::CreditCardInfo {
            credit_card_number: c.number.clone(),
            credit_card_cvv: c.cvv,
            credit_card_expiration_year: c.expiration_year,
            credit_card_expiration_month: c.expiration_month,
        }
    }
}

impl From<&model::OrderItem> for proto::OrderItem {
    fn from(item: &model::OrderItem) -> Self {
        proto::OrderItem {
            item: Some((&item.item).into()),
            cost: Some((&item.cost).into()),
        }
    }
}

impl From<&model::OrderResult> for proto::OrderResult {
    fn from(order: &model::OrderResult) -> Self {
        proto::OrderResult {
            order_id: order.order_id.clone(),
            shipping_tracking_id: order.shipping_tracking_id.clone(),
            shipping_cost: Some((&order.shipping_cost).into()),
            shipping_address: Some((&order.shipping_address).into()),
            items: order.items.iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<proto::PlaceOrderRequest> for model::CheckoutRequest {
    type Error = InvalidField;

    fn try_from(req: proto::PlaceOrderRequest) -> Result<Self, Self::Error> {
        let address = req.address.ok_or(InvalidField("address"))?;
        let credit_card = req.credit_card.ok_or(InvalidField("credit_card"))?;
        Ok(model::CheckoutRequest {
            user_id: req.user_id,
            user_currency: req.user_currency,
            address: address.into(),
            email: req.email,
            credit_card: credit_card.into(),
        })
    }
}

pub(crate) fn cart_items(items: &[model::CartItem]) -> Vec<proto::CartItem> {
    items.iter().map(Into::into).collect()
}
