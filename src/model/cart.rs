use crate::model::Money;

/// One line of a user's cart, as owned by the cart collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A cart line priced in the currency the user asked for.
///
/// `cost` is the line total (unit price times quantity), not the unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub item: CartItem,
    pub cost: Money,
}

/// The catalog's view of a product; only what checkout needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price_usd: Money,
}
