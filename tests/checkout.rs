//! Cart-to-order tests: subtotal over checked lines, discount application,
//! total assembly.

use batik_market::checkout::{build_order, cart_subtotal};
use batik_market::shipping::shipping_option;
use batik_market::store::ProductCatalog;
use batik_market::types::cart::CartLine;
use batik_market::types::voucher::{DiscountType, Voucher};
use chrono::{TimeZone, Utc};

fn line(product_id: &str, quantity: u32, checked: bool) -> CartLine {
    CartLine {
        product_id: product_id.to_string(),
        quantity,
        checked,
    }
}

#[test]
fn subtotal_sums_checked_lines_at_catalog_prices() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("1", 2, true), line("4", 1, true)];

    // 2 x 2,300,000 + 1 x 1,200,000
    assert_eq!(cart_subtotal(&catalog, &lines), 5_800_000);
}

#[test]
fn unchecked_lines_are_excluded() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("1", 2, true), line("4", 1, false)];
    assert_eq!(cart_subtotal(&catalog, &lines), 4_600_000);
}

#[test]
fn unknown_products_contribute_nothing() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("1", 1, true), line("999", 3, true)];
    assert_eq!(cart_subtotal(&catalog, &lines), 2_300_000);
}

#[test]
fn checkout_without_voucher_totals_subtotal_plus_shipping() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("1", 2, true), line("4", 1, true)];
    let shipping = shipping_option("reguler").unwrap();

    let draft = build_order(&catalog, &lines, "addr-1", &shipping, None, None);

    assert_eq!(draft.subtotal, 5_800_000);
    assert_eq!(draft.discount, 0);
    assert_eq!(draft.total, 5_800_000 + shipping.cost);
    assert_eq!(draft.items.len(), 2);
    assert_eq!(draft.voucher_code, None);
    assert_eq!(draft.shipping_option, "reguler");
}

#[test]
fn checkout_applies_capped_percentage_voucher() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("1", 2, true), line("4", 1, true)];
    let shipping = shipping_option("express").unwrap();
    let voucher = Voucher {
        id: "v1".to_string(),
        code: "BATIKBARU".to_string(),
        name: "Diskon Pengguna Baru".to_string(),
        description: String::new(),
        discount_type: DiscountType::Percentage,
        discount_value: 10,
        min_purchase: 100_000,
        max_discount: Some(50_000),
        expiry_date: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
    };

    let draft = build_order(&catalog, &lines, "addr-1", &shipping, Some(&voucher), None);

    // 10% of 5,800,000 would be 580,000; the cap wins.
    assert_eq!(draft.discount, 50_000);
    assert_eq!(draft.total, 5_800_000 - 50_000 + shipping.cost);
    assert_eq!(draft.voucher_code.as_deref(), Some("BATIKBARU"));
}

#[test]
fn total_is_clamped_at_zero_when_fixed_discount_exceeds_subtotal() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("5", 1, true)]; // 350,000
    let shipping = shipping_option("reguler").unwrap();
    let voucher = Voucher {
        id: "v-big".to_string(),
        code: "MEGA".to_string(),
        name: "Potongan besar".to_string(),
        description: String::new(),
        discount_type: DiscountType::Fixed,
        discount_value: 1_000_000,
        min_purchase: 0,
        max_discount: None,
        expiry_date: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
    };

    let draft = build_order(&catalog, &lines, "addr-1", &shipping, Some(&voucher), None);

    assert_eq!(draft.subtotal, 350_000);
    assert_eq!(draft.discount, 1_000_000);
    assert_eq!(draft.total, 0);
}

#[test]
fn items_capture_catalog_prices() {
    let catalog = ProductCatalog::seed();
    let lines = vec![line("4", 3, true)];
    let shipping = shipping_option("reguler").unwrap();

    let draft = build_order(&catalog, &lines, "addr-2", &shipping, None, None);

    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.items[0].product_id, "4");
    assert_eq!(draft.items[0].quantity, 3);
    assert_eq!(draft.items[0].price, 1_200_000);
    assert_eq!(draft.subtotal, 3_600_000);
}
