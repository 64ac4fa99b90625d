use checkout_service::checkout::{Checkout, CheckoutError, PricingMode, PrepareError};
use checkout_service::clients::mock::MockCollaborators;
use checkout_service::model::{Address, CartItem, CheckoutRequest, CreditCardInfo, Money, Product};
use rpc_framework::RpcError;
use std::time::Duration;
use tonic::Code;

fn usd(units: i64, nanos: i32) -> Money {
    Money::new("USD", units, nanos)
}

fn eur(units: i64, nanos: i32) -> Money {
    Money::new("EUR", units, nanos)
}

fn product(id: &str, price_usd: Money) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        price_usd,
    }
}

fn address() -> Address {
    Address {
        street_address: "1600 Amphitheatre Parkway".to_string(),
        city: "Mountain View".to_string(),
        state: "CA".to_string(),
        country: "United States".to_string(),
        zip_code: 94043,
    }
}

fn card() -> CreditCardInfo {
    CreditCardInfo {
        number: "4432801561520454".to_string(),
        cvv: 672,
        expiration_year: 2030,
        expiration_month: 1,
    }
}

fn request(currency: &str) -> CheckoutRequest {
    CheckoutRequest {
        user_id: "u1".to_string(),
        user_currency: currency.to_string(),
        address: address(),
        email: "someone@example.com".to_string(),
        credit_card: card(),
    }
}

/// u1 buys two P1 at 10.00 USD; the currency service turns 20.00 USD into 18.00 EUR and
/// 5.00 USD of shipping into 4.50 EUR.
fn script_eur_order(mocks: &MockCollaborators) {
    mocks.cart.get_cart.expect().return_ok(vec![CartItem::new("P1", 2)]);
    mocks.catalog.get_product.expect().return_ok(product("P1", usd(10, 0)));
    mocks.currency.convert.expect().return_ok(eur(18, 0));
    mocks.shipping.get_quote.expect().return_ok(usd(5, 0));
    mocks.currency.convert.expect().return_ok(eur(4, 500_000_000));
}

fn script_fulfilment(mocks: &MockCollaborators) {
    mocks.payment.charge.expect().return_ok("tx-1".to_string());
    mocks.shipping.ship_order.expect().return_ok("track-1".to_string());
    mocks.cart.empty_cart.expect().return_ok(());
    mocks.email.send_order_confirmation.expect().return_ok(());
}

fn checkout(mocks: &MockCollaborators) -> Checkout {
    Checkout::new(mocks.collaborators(), PricingMode::Sequential)
}

#[tokio::test]
async fn test_eur_order_charges_localized_total() {
    let mocks = MockCollaborators::new();
    script_eur_order(&mocks);
    script_fulfilment(&mocks);

    let order = checkout(&mocks).place_order(request("EUR")).await.unwrap();

    assert!(uuid::Uuid::parse_str(&order.order_id).is_ok());
    assert_eq!(order.shipping_tracking_id, "track-1");
    assert_eq!(order.shipping_cost, eur(4, 500_000_000));
    assert_eq!(order.shipping_address, address());
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].item, CartItem::new("P1", 2));
    assert_eq!(order.items[0].cost, eur(18, 0));

    let charges = mocks.payment.charge.calls();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].0, eur(22, 500_000_000));
    assert_eq!(charges[0].1, card());

    assert_eq!(
        mocks.currency.convert.calls(),
        vec![(usd(20, 0), "EUR".to_string()), (usd(5, 0), "EUR".to_string())]
    );
    assert_eq!(
        mocks.shipping.ship_order.calls(),
        vec![(address(), vec![CartItem::new("P1", 2)])]
    );
    assert_eq!(mocks.cart.empty_cart.calls(), vec!["u1".to_string()]);
    assert_eq!(
        mocks.email.send_order_confirmation.calls(),
        vec![("someone@example.com".to_string(), order)]
    );
    mocks.verify();
}

#[tokio::test]
async fn test_charge_equals_independently_summed_order() {
    let mocks = MockCollaborators::new();
    mocks.cart.get_cart.expect().return_ok(vec![
        CartItem::new("A", 1),
        CartItem::new("B", 3),
        CartItem::new("C", 2),
    ]);
    let localized = [
        Money::new("JPY", 1_200, 0),
        Money::new("JPY", 0, 999_999_999),
        Money::new("JPY", 45, 500_000_001),
    ];
    for (id, cost) in ["A", "B", "C"].iter().zip(&localized) {
        mocks.catalog.get_product.expect().return_ok(product(id, usd(1, 0)));
        mocks.currency.convert.expect().return_ok(cost.clone());
    }
    mocks.shipping.get_quote.expect().return_ok(usd(8, 990_000_000));
    mocks.currency.convert.expect().return_ok(Money::new("JPY", 1_300, 250_000_000));
    script_fulfilment(&mocks);

    let order = checkout(&mocks).place_order(request("JPY")).await.unwrap();

    let mut expected = order.shipping_cost.clone();
    for item in &order.items {
        expected = expected.sum(&item.cost).unwrap();
    }
    assert_eq!(expected, Money::new("JPY", 2_546, 750_000_000));
    assert_eq!(mocks.payment.charge.calls()[0].0, expected);
    mocks.verify();
}

#[tokio::test]
async fn test_every_call_is_a_new_order() {
    let mocks = MockCollaborators::new();
    let checkout = checkout(&mocks);

    script_eur_order(&mocks);
    script_fulfilment(&mocks);
    let first = checkout.place_order(request("EUR")).await.unwrap();

    script_eur_order(&mocks);
    script_fulfilment(&mocks);
    let second = checkout.place_order(request("EUR")).await.unwrap();

    assert_ne!(first.order_id, second.order_id);
    assert_eq!(mocks.payment.charge.call_count(), 2);
    assert_eq!(mocks.shipping.ship_order.call_count(), 2);
    mocks.verify();
}

#[tokio::test]
async fn test_empty_cart_pays_for_shipping_only() {
    let mocks = MockCollaborators::new();
    mocks.cart.get_cart.expect().return_ok(vec![]);
    mocks.shipping.get_quote.expect().return_ok(usd(5, 0));
    mocks.currency.convert.expect().return_ok(eur(4, 500_000_000));
    script_fulfilment(&mocks);

    let order = checkout(&mocks).place_order(request("EUR")).await.unwrap();

    assert!(order.items.is_empty());
    assert_eq!(mocks.payment.charge.calls()[0].0, eur(4, 500_000_000));
    assert_eq!(mocks.catalog.get_product.call_count(), 0);
    mocks.verify();
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Cart,
    Product,
    ItemConversion,
    Quote,
    ShippingConversion,
}

/// Scripts a successful preparation up to `stage`, which fails.
fn script_failure_at(mocks: &MockCollaborators, stage: Stage) {
    let down = |service| RpcError::unavailable(service, "connection refused");

    if let Stage::Cart = stage {
        mocks.cart.get_cart.expect().return_err(down("cart"));
        return;
    }
    mocks.cart.get_cart.expect().return_ok(vec![CartItem::new("P1", 2)]);

    if let Stage::Product = stage {
        mocks.catalog.get_product.expect().return_err(RpcError::rejected(
            "product catalog",
            Code::NotFound,
            "no product with ID P1",
        ));
        return;
    }
    mocks.catalog.get_product.expect().return_ok(product("P1", usd(10, 0)));

    if let Stage::ItemConversion = stage {
        mocks.currency.convert.expect().return_err(down("currency"));
        return;
    }
    mocks.currency.convert.expect().return_ok(eur(18, 0));

    if let Stage::Quote = stage {
        mocks.shipping.get_quote.expect().return_err(down("shipping"));
        return;
    }
    mocks.shipping.get_quote.expect().return_ok(usd(5, 0));
    mocks.currency.convert.expect().return_err(down("currency"));
}

#[tokio::test]
async fn test_preparation_failures_are_internal_and_never_charge() {
    for stage in [
        Stage::Cart,
        Stage::Product,
        Stage::ItemConversion,
        Stage::Quote,
        Stage::ShippingConversion,
    ] {
        let mocks = MockCollaborators::new();
        script_failure_at(&mocks, stage);

        let err = checkout(&mocks).place_order(request("EUR")).await.unwrap_err();

        let matched = match (stage, &err) {
            (Stage::Cart, CheckoutError::Prepare(PrepareError::Cart(_))) => true,
            (Stage::Product, CheckoutError::Prepare(PrepareError::Product { product_id, .. })) => {
                product_id == "P1"
            }
            (
                Stage::ItemConversion,
                CheckoutError::Prepare(PrepareError::Conversion { product_id, .. }),
            ) => product_id == "P1",
            (Stage::Quote, CheckoutError::Prepare(PrepareError::ShippingQuote(_))) => true,
            (
                Stage::ShippingConversion,
                CheckoutError::Prepare(PrepareError::ShippingConversion(_)),
            ) => true,
            _ => false,
        };
        assert!(matched, "{stage:?} failed with {err:?}");

        let status = tonic::Status::from(err);
        assert_eq!(status.code(), Code::Internal, "{stage:?}");
        assert_eq!(mocks.payment.charge.call_count(), 0, "{stage:?}");
        assert_eq!(mocks.shipping.ship_order.call_count(), 0, "{stage:?}");
        mocks.verify();
    }
}

#[tokio::test]
async fn test_wrong_currency_from_converter_never_charges() {
    let mocks = MockCollaborators::new();
    mocks.cart.get_cart.expect().return_ok(vec![CartItem::new("P1", 1)]);
    mocks.catalog.get_product.expect().return_ok(product("P1", usd(10, 0)));
    mocks.currency.convert.expect().return_ok(usd(10, 0));

    let err = checkout(&mocks).place_order(request("EUR")).await.unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Prepare(PrepareError::UnexpectedCurrency { ref expected, ref actual })
            if expected == "EUR" && actual == "USD"
    ));
    assert_eq!(tonic::Status::from(err).code(), Code::Internal);
    assert_eq!(mocks.payment.charge.call_count(), 0);
}

#[tokio::test]
async fn test_declined_card_stops_before_shipping() {
    let mocks = MockCollaborators::new();
    script_eur_order(&mocks);
    mocks.payment.charge.expect().return_err(RpcError::rejected(
        "payment",
        Code::InvalidArgument,
        "Credit card info is invalid",
    ));

    let err = checkout(&mocks).place_order(request("EUR")).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Charge(_)));
    let status = tonic::Status::from(err);
    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("Credit card info is invalid"));
    assert_eq!(mocks.shipping.ship_order.call_count(), 0);
    assert_eq!(mocks.cart.empty_cart.call_count(), 0);
    assert_eq!(mocks.email.send_order_confirmation.call_count(), 0);
    mocks.verify();
}

#[tokio::test]
async fn test_ship_failure_after_charge_is_not_refunded() {
    let mocks = MockCollaborators::new();
    script_eur_order(&mocks);
    mocks.payment.charge.expect().return_ok("tx-1".to_string());
    mocks
        .shipping
        .ship_order
        .expect()
        .return_err(RpcError::unavailable("shipping", "carrier offline"));

    let err = checkout(&mocks).place_order(request("EUR")).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Ship(_)));
    assert_eq!(tonic::Status::from(err).code(), Code::Unavailable);
    // The only payment call is the original charge.
    assert_eq!(
        mocks.payment.charge.calls().iter().map(|(amount, _)| amount.clone()).collect::<Vec<_>>(),
        vec![eur(22, 500_000_000)]
    );
    assert_eq!(mocks.cart.empty_cart.call_count(), 0);
    assert_eq!(mocks.email.send_order_confirmation.call_count(), 0);
    mocks.verify();
}

#[tokio::test]
async fn test_empty_cart_failure_still_succeeds() {
    let mocks = MockCollaborators::new();
    script_eur_order(&mocks);
    mocks.payment.charge.expect().return_ok("tx-1".to_string());
    mocks.shipping.ship_order.expect().return_ok("track-1".to_string());
    mocks
        .cart
        .empty_cart
        .expect()
        .return_err(RpcError::unavailable("cart", "redis down"));
    mocks.email.send_order_confirmation.expect().return_ok(());

    let order = checkout(&mocks).place_order(request("EUR")).await.unwrap();

    assert_eq!(order.shipping_tracking_id, "track-1");
    assert_eq!(mocks.email.send_order_confirmation.call_count(), 1);
    mocks.verify();
}

#[tokio::test]
async fn test_email_failure_still_succeeds() {
    let mocks = MockCollaborators::new();
    script_eur_order(&mocks);
    mocks.payment.charge.expect().return_ok("tx-1".to_string());
    mocks.shipping.ship_order.expect().return_ok("track-1".to_string());
    mocks.cart.empty_cart.expect().return_ok(());
    mocks.email.send_order_confirmation.expect().return_err(RpcError::rejected(
        "email",
        Code::Internal,
        "template error",
    ));

    let order = checkout(&mocks).place_order(request("EUR")).await.unwrap();

    assert_eq!(order.items[0].cost, eur(18, 0));
    mocks.verify();
}

#[tokio::test]
async fn test_cancelled_during_charge_runs_nothing_after() {
    let mocks = MockCollaborators::new();
    script_eur_order(&mocks);
    mocks.payment.charge.expect().hang();

    let checkout = checkout(&mocks);
    let outcome =
        tokio::time::timeout(Duration::from_millis(50), checkout.place_order(request("EUR"))).await;

    assert!(outcome.is_err(), "place_order should still be waiting on payment");
    assert_eq!(mocks.payment.charge.call_count(), 1);
    assert_eq!(mocks.shipping.ship_order.call_count(), 0);
    assert_eq!(mocks.cart.empty_cart.call_count(), 0);
    assert_eq!(mocks.email.send_order_confirmation.call_count(), 0);
    mocks.verify();
}

#[tokio::test]
async fn test_cancelled_during_preparation_never_charges() {
    let mocks = MockCollaborators::new();
    mocks.cart.get_cart.expect().return_ok(vec![CartItem::new("P1", 2)]);
    mocks.catalog.get_product.expect().return_ok(product("P1", usd(10, 0)));
    mocks.currency.convert.expect().hang();

    let checkout = checkout(&mocks);
    let outcome =
        tokio::time::timeout(Duration::from_millis(50), checkout.place_order(request("EUR"))).await;

    assert!(outcome.is_err());
    assert_eq!(mocks.shipping.get_quote.call_count(), 0);
    assert_eq!(mocks.payment.charge.call_count(), 0);
}
