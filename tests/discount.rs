//! Discount engine tests: gating, percentage cap, fixed amounts.

use batik_market::discount::calculate_discount;
use batik_market::types::voucher::{DiscountType, Voucher};
use chrono::{TimeZone, Utc};

fn voucher(discount_type: DiscountType, value: i64, min_purchase: i64, cap: Option<i64>) -> Voucher {
    Voucher {
        id: "v-test".to_string(),
        code: "TEST".to_string(),
        name: "Test voucher".to_string(),
        description: String::new(),
        discount_type,
        discount_value: value,
        min_purchase,
        max_discount: cap,
        expiry_date: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
    }
}

#[test]
fn no_voucher_yields_zero() {
    assert_eq!(calculate_discount(500_000, None), 0);
    assert_eq!(calculate_discount(0, None), 0);
}

#[test]
fn below_min_purchase_yields_zero_for_both_types() {
    let pct = voucher(DiscountType::Percentage, 10, 100_000, Some(50_000));
    let fixed = voucher(DiscountType::Fixed, 25_000, 150_000, None);

    assert_eq!(calculate_discount(99_999, Some(&pct)), 0);
    assert_eq!(calculate_discount(149_999, Some(&fixed)), 0);
    assert_eq!(calculate_discount(0, Some(&pct)), 0);
}

#[test]
fn percentage_applies_at_exact_minimum() {
    let pct = voucher(DiscountType::Percentage, 10, 100_000, Some(50_000));
    assert_eq!(calculate_discount(100_000, Some(&pct)), 10_000);
}

#[test]
fn percentage_capped_by_max_discount() {
    let pct = voucher(DiscountType::Percentage, 10, 100_000, Some(50_000));
    // 10% of 1,000,000 is 100,000 but the cap wins.
    assert_eq!(calculate_discount(1_000_000, Some(&pct)), 50_000);
}

#[test]
fn percentage_uncapped_without_max_discount() {
    let pct = voucher(DiscountType::Percentage, 10, 100_000, None);
    assert_eq!(calculate_discount(1_000_000, Some(&pct)), 100_000);
}

#[test]
fn fixed_applies_at_exact_minimum() {
    let fixed = voucher(DiscountType::Fixed, 25_000, 150_000, None);
    assert_eq!(calculate_discount(150_000, Some(&fixed)), 25_000);
}

#[test]
fn fixed_is_not_clamped_to_subtotal() {
    // A fixed voucher can exceed the subtotal; clamping the total is the
    // caller's job.
    let fixed = voucher(DiscountType::Fixed, 500_000, 0, None);
    assert_eq!(calculate_discount(200_000, Some(&fixed)), 500_000);
}

#[test]
fn deterministic_for_same_inputs() {
    let pct = voucher(DiscountType::Percentage, 15, 1_000_000, Some(150_000));
    let a = calculate_discount(2_000_000, Some(&pct));
    let b = calculate_discount(2_000_000, Some(&pct));
    assert_eq!(a, b);
    assert_eq!(a, 150_000);
}
