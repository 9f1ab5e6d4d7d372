//! Checkout scenarios driven by the fixture sets under `fixtures/`.

use lattice_checkout::{
    fixtures::{Fixture, FixtureError},
    items::ItemError,
};
use rust_decimal::Decimal;
use testresult::TestResult;

#[test]
fn double11_discounts_complete_groups_only() -> TestResult {
    let fixture = Fixture::from_set("double11")?;
    let order = fixture.checkout()?;

    // 7 mugs at 100 make 2 groups of 3; the 7th mug and both socks pay full price.
    assert_eq!(order.original_amount(), Decimal::from(710));
    assert_eq!(order.discount(), Decimal::from(60));
    assert_eq!(order.total_amount(), Decimal::from(650));

    Ok(())
}

#[test]
fn threshold_discount_lands_on_top_of_bulk_discount() -> TestResult {
    let fixture = Fixture::from_set("stacked")?;
    let order = fixture.checkout()?;

    assert_eq!(order.original_amount(), Decimal::from(600));
    assert_eq!(order.discount(), Decimal::from(110));
    assert_eq!(order.total_amount(), Decimal::from(490));

    Ok(())
}

#[test]
fn cosmetics_lines_receive_one_bonus_unit_each() -> TestResult {
    let fixture = Fixture::from_set("cosmetics")?;
    let order = fixture.checkout()?;

    assert_eq!(order.received_quantity("Lipstick"), Some(2));
    assert_eq!(order.received_quantity("Mascara"), Some(4));
    assert_eq!(order.received_quantity("Shampoo"), Some(2));

    assert_eq!(order.original_amount(), Decimal::new(82_50, 2));
    assert_eq!(order.discount(), Decimal::ZERO);
    assert_eq!(order.total_amount(), Decimal::new(82_50, 2));

    Ok(())
}

#[test]
fn threshold_is_reached_at_exactly_the_threshold() -> TestResult {
    let fixture = Fixture::from_set("threshold")?;
    let order = fixture.checkout()?;

    assert_eq!(order.original_amount(), Decimal::from(1000));
    assert_eq!(order.discount(), Decimal::from(100));
    assert_eq!(order.total_amount(), Decimal::from(900));

    Ok(())
}

#[test]
fn all_promotions_apply_together() -> TestResult {
    let fixture = Fixture::from_set("everything")?;
    let order = fixture.checkout()?;

    // Bulk: lipstick 1 group (6) + mug 2 groups (60); threshold adds 50.
    assert_eq!(order.original_amount(), Decimal::from(760));
    assert_eq!(order.discount(), Decimal::from(116));
    assert_eq!(order.total_amount(), Decimal::from(644));

    assert_eq!(order.received_quantity("Lipstick"), Some(4));
    assert_eq!(order.received_quantity("Ceramic Mug"), Some(7));

    Ok(())
}

#[test]
fn negative_quantity_is_rejected_before_checkout() -> TestResult {
    let fixture = Fixture::from_set("invalid")?;

    assert!(matches!(
        fixture.checkout(),
        Err(FixtureError::Item(ItemError::InvalidQuantity(-1)))
    ));

    Ok(())
}

#[test]
fn unknown_fixture_set_errors() {
    assert!(matches!(
        Fixture::from_set("no-such-set"),
        Err(FixtureError::Io(_))
    ));
}
