//! Pure data types for checkout: money, cart contents, customer data and order results.

pub mod cart;
pub mod customer;
pub mod money;
pub mod order;

pub use cart::*;
pub use customer::*;
pub use money::{Money, MoneyError};
pub use order::*;
