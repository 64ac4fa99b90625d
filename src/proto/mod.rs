//! Protobuf messages of the `hipstershop` package, as exchanged with the collaborators and
//! the checkout caller. Field numbers follow the public `demo.proto`.

pub mod checkout_server;
pub mod convert;

pub use checkout_server::checkout_service_server;
pub use convert::InvalidField;

use std::fmt;

pub const CART_GET_CART: &str = "/hipstershop.CartService/GetCart";
pub const CART_EMPTY_CART: &str = "/hipstershop.CartService/EmptyCart";
pub const CATALOG_GET_PRODUCT: &str = "/hipstershop.ProductCatalogService/GetProduct";
pub const CURRENCY_CONVERT: &str = "/hipstershop.CurrencyService/Convert";
pub const SHIPPING_GET_QUOTE: &str = "/hipstershop.ShippingService/GetQuote";
pub const SHIPPING_SHIP_ORDER: &str = "/hipstershop.ShippingService/ShipOrder";
pub const PAYMENT_CHARGE: &str = "/hipstershop.PaymentService/Charge";
pub const EMAIL_SEND_ORDER_CONFIRMATION: &str =
    "/hipstershop.EmailService/SendOrderConfirmation";

#[derive(Clone, PartialEq, prost::Message)]
pub struct Money {
    #[prost(string, tag = "1")]
    pub currency_code: String,
    #[prost(int64, tag = "2")]
    pub units: i64,
    #[prost(int32, tag = "3")]
    pub nanos: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Empty {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CartItem {
    #[prost(string, tag = "1")]
    pub product_id: String,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetCartRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EmptyCartRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Cart {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub picture: String,
    #[prost(message, optional, tag = "5")]
    pub price_usd: Option<Money>,
    #[prost(string, repeated, tag = "6")]
    pub categories: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CurrencyConversionRequest {
    #[prost(message, optional, tag = "1")]
    pub from: Option<Money>,
    #[prost(string, tag = "2")]
    pub to_code: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Address {
    #[prost(string, tag = "1")]
    pub street_address: String,
    #[prost(string, tag = "2")]
    pub city: String,
    #[prost(string, tag = "3")]
    pub state: String,
    #[prost(string, tag = "4")]
    pub country: String,
    #[prost(int32, tag = "5")]
    pub zip_code: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetQuoteRequest {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetQuoteResponse {
    #[prost(message, optional, tag = "1")]
    pub cost_usd: Option<Money>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShipOrderRequest {
    #[prost(message, optional, tag = "1")]
    pub address: Option<Address>,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<CartItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ShipOrderResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct CreditCardInfo {
    #[prost(string, tag = "1")]
    pub credit_card_number: String,
    #[prost(int32, tag = "2")]
    pub credit_card_cvv: i32,
    #[prost(int32, tag = "3")]
    pub credit_card_expiration_year: i32,
    #[prost(int32, tag = "4")]
    pub credit_card_expiration_month: i32,
}

impl fmt::Debug for CreditCardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardInfo").finish_non_exhaustive()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChargeRequest {
    #[prost(message, optional, tag = "1")]
    pub amount: Option<Money>,
    #[prost(message, optional, tag = "2")]
    pub credit_card: Option<CreditCardInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChargeResponse {
    #[prost(string, tag = "1")]
    pub transaction_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderItem {
    #[prost(message, optional, tag = "1")]
    pub item: Option<CartItem>,
    #[prost(message, optional, tag = "2")]
    pub cost: Option<Money>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderResult {
    #[prost(string, tag = "1")]
    pub order_id: String,
    #[prost(string, tag = "2")]
    pub shipping_tracking_id: String,
    #[prost(message, optional, tag = "3")]
    pub shipping_cost: Option<Money>,
    #[prost(message, optional, tag = "4")]
    pub shipping_address: Option<Address>,
    #[prost(message, repeated, tag = "5")]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SendOrderConfirmationRequest {
    #[prost(string, tag = "1")]
    pub email: String,
    #[prost(message, optional, tag = "2")]
    pub order: Option<OrderResult>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlaceOrderRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub user_currency: String,
    #[prost(message, optional, tag = "3")]
    pub address: Option<Address>,
    #[prost(string, tag = "5")]
    pub email: String,
    #[prost(message, optional, tag = "6")]
    pub credit_card: Option<CreditCardInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlaceOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<OrderResult>,
}
