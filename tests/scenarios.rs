//! Integration tests for the worked examples.
//!
//! The standard catalogue is
//! `[(100000,130000),(50000,65000),(30000,39000),(20000,26000),(10000,13000),(5000,6500)]`
//! and the premium catalogue `[(70000,100000),(35000,50000),(21000,30000),(7000,10000)]`,
//! both with at most 5 cards of each kind in Plan B.
//!
//! Expected plans:
//!
//! 1. ฿130,000: one 130,000 card in both plans, pay 100,000, save 30,000 (23.08%)
//! 2. ฿100,000: Plan A buys 65,000 + 26,000 + 6,500 of value for 75,000 and
//!    2,500 in cash (save 22.50%). Plan B buys 65,000 + 39,000 for 80,000 with
//!    4,000 left on the cards.
//! 3. ฿5,000: Plan A is all cash. Plan B buys one 6,500 card, saving nothing
//!    but leaving 1,500 stored.
//! 4. ฿1: Plan B buys one 6,500 card, so the customer pays 4,999 over the price.
//! 5. ฿50,000 (premium): one 50,000 card in both plans, save 30.00%.
//! 6. Prices above five of every card (฿1,397,500) have no Plan B.

use std::io;

use rust_decimal::Decimal;
use testresult::TestResult;

use cashcard::{
    advice::{Advice, plan},
    catalogue::{Catalogue, Preset},
    planners::exhaustive::DEFAULT_MAX_PER_DENOMINATION,
    plans::Plan,
    price::Price,
    summary::{Strategy, Summary},
};

fn advise(price: u64, preset: Preset) -> TestResult<Advice> {
    let catalogue = preset.catalogue()?;

    Ok(plan(Price::new(price)?, &catalogue, DEFAULT_MAX_PER_DENOMINATION)?)
}

fn plan_of(catalogue: &Catalogue, counts: &[u64]) -> Plan {
    Plan::from_counts(catalogue, counts)
}

fn plan_b(advice: &Advice) -> TestResult<&Summary> {
    Ok(advice
        .plan_b
        .as_ref()
        .ok_or_else(|| io::Error::other("Plan B should be available"))?)
}

#[test]
fn test_exact_single_card_price() -> TestResult {
    let catalogue = Preset::Standard.catalogue()?;
    let advice = advise(130_000, Preset::Standard)?;

    let expected = plan_of(&catalogue, &[1, 0, 0, 0, 0, 0]);

    assert_eq!(advice.plan_a.plan(), &expected);
    assert_eq!(advice.plan_a.total_to_pay(), 100_000);
    assert_eq!(advice.plan_a.discount_amount(), 30_000);
    assert_eq!(advice.plan_a.discount_percent(), Decimal::new(2308, 2));

    let plan_b = plan_b(&advice)?;

    assert_eq!(plan_b.plan(), &expected);
    assert_eq!(plan_b.leftover(), Some(0));
    assert_eq!(plan_b.total_to_pay(), 100_000);

    Ok(())
}

#[test]
fn test_greedy_walkthrough_leaves_cash_shortfall() -> TestResult {
    let catalogue = Preset::Standard.catalogue()?;
    let advice = advise(100_000, Preset::Standard)?;

    assert_eq!(advice.plan_a.strategy(), Strategy::CardsPlusCash);
    assert_eq!(advice.plan_a.plan(), &plan_of(&catalogue, &[0, 1, 0, 1, 0, 1]));
    assert_eq!(advice.plan_a.total_face_value(), 97_500);
    assert_eq!(advice.plan_a.card_price_subtotal(), 75_000);
    assert_eq!(advice.plan_a.cash_shortfall(), 2500);
    assert_eq!(advice.plan_a.total_to_pay(), 77_500);
    assert_eq!(advice.plan_a.discount_amount(), 22_500);
    assert_eq!(advice.plan_a.discount_percent(), Decimal::new(2250, 2));

    let plan_b = plan_b(&advice)?;

    assert_eq!(plan_b.strategy(), Strategy::CardsOnly);
    assert_eq!(plan_b.plan(), &plan_of(&catalogue, &[0, 1, 1, 0, 0, 0]));
    assert_eq!(plan_b.cash_shortfall(), 0);
    assert_eq!(plan_b.total_to_pay(), 80_000);
    assert_eq!(plan_b.discount_amount(), 20_000);
    assert_eq!(plan_b.discount_percent(), Decimal::new(2000, 2));
    assert_eq!(plan_b.leftover(), Some(4000));

    Ok(())
}

#[test]
fn test_price_below_smallest_card() -> TestResult {
    let catalogue = Preset::Standard.catalogue()?;
    let advice = advise(5000, Preset::Standard)?;

    assert!(advice.plan_a.plan().is_empty());
    assert_eq!(advice.plan_a.cash_shortfall(), 5000);
    assert_eq!(advice.plan_a.total_to_pay(), 5000);
    assert_eq!(advice.plan_a.discount_amount(), 0);
    assert_eq!(advice.plan_a.discount_percent(), Decimal::new(0, 2));

    let plan_b = plan_b(&advice)?;

    assert_eq!(plan_b.plan(), &plan_of(&catalogue, &[0, 0, 0, 0, 0, 1]));
    assert_eq!(plan_b.total_to_pay(), 5000);
    assert_eq!(plan_b.discount_amount(), 0);
    assert_eq!(plan_b.leftover(), Some(1500));

    Ok(())
}

#[test]
fn test_tiny_price_overpays_for_stored_value() -> TestResult {
    let catalogue = Preset::Standard.catalogue()?;
    let advice = advise(1, Preset::Standard)?;

    assert!(advice.plan_a.plan().is_empty());
    assert_eq!(advice.plan_a.cash_shortfall(), 1);
    assert_eq!(advice.plan_a.total_to_pay(), 1);
    assert_eq!(advice.plan_a.discount_amount(), 0);

    let plan_b = plan_b(&advice)?;

    assert_eq!(plan_b.plan(), &plan_of(&catalogue, &[0, 0, 0, 0, 0, 1]));
    assert_eq!(plan_b.total_to_pay(), 5000);
    assert_eq!(plan_b.discount_amount(), -4999);
    assert!(plan_b.is_overpayment());

    Ok(())
}

#[test]
fn test_premium_catalogue_exact_cover() -> TestResult {
    let catalogue = Preset::Premium.catalogue()?;
    let advice = advise(50_000, Preset::Premium)?;

    let expected = plan_of(&catalogue, &[0, 1, 0, 0]);

    assert_eq!(advice.plan_a.plan(), &expected);
    assert_eq!(advice.plan_a.total_to_pay(), 35_000);
    assert_eq!(advice.plan_a.discount_amount(), 15_000);
    assert_eq!(advice.plan_a.discount_percent(), Decimal::new(3000, 2));
    assert_eq!(plan_b(&advice)?.plan(), &expected);

    Ok(())
}

#[test]
fn test_price_beyond_card_bound_has_no_plan_b() -> TestResult {
    let catalogue = Preset::Standard.catalogue()?;
    let advice = advise(2_000_000, Preset::Standard)?;

    assert!(advice.plan_b.is_none());
    assert_eq!(advice.plan_a.plan(), &plan_of(&catalogue, &[15, 0, 1, 0, 0, 1]));
    assert_eq!(advice.plan_a.cash_shortfall(), 4500);

    Ok(())
}

#[test]
fn test_largest_coverable_price_uses_every_card() -> TestResult {
    let advice = advise(1_397_500, Preset::Standard)?;

    let plan_b = plan_b(&advice)?;

    assert_eq!(plan_b.plan().card_count(), 30);
    assert_eq!(plan_b.leftover(), Some(0));

    let advice = advise(1_397_501, Preset::Standard)?;

    assert!(advice.plan_b.is_none());

    Ok(())
}

#[test]
fn test_prices_above_the_largest_card_can_still_be_covered() -> TestResult {
    let advice = advise(800_000, Preset::Standard)?;

    let plan_b = plan_b(&advice)?;

    assert!(plan_b.total_face_value() >= 800_000);
    assert_eq!(plan_b.cash_shortfall(), 0);

    Ok(())
}

#[test]
fn test_advice_is_deterministic() -> TestResult {
    for price in [1, 5000, 77_777, 100_000, 654_321] {
        assert_eq!(advise(price, Preset::Standard)?, advise(price, Preset::Standard)?);
    }

    Ok(())
}
