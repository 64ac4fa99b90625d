use std::fmt;

/// Shipping destination. Checkout never inspects it; it is handed to shipping and email as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: i32,
}

/// Payment credential, handed to the payment collaborator only.
///
/// `Debug` prints no field.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCardInfo {
    pub number: String,
    pub cvv: i32,
    pub expiration_year: i32,
    pub expiration_month: i32,
}

impl fmt::Debug for CreditCardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardInfo").finish_non_exhaustive()
    }
}
