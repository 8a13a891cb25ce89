//! Checkout assembly: price the checked cart lines against the catalog,
//! apply the discount engine, resolve shipping, and produce the order draft
//! the store stamps into an Order.

use crate::discount::calculate_discount;
use crate::shipping::ShippingOption;
use crate::store::products::ProductCatalog;
use crate::types::cart::CartLine;
use crate::types::order::{OrderDraft, OrderItem, Rupiah};
use crate::types::voucher::Voucher;

/// Subtotal over the checked cart lines. Unchecked lines and unknown product
/// ids contribute nothing.
pub fn cart_subtotal(catalog: &ProductCatalog, lines: &[CartLine]) -> Rupiah {
    lines
        .iter()
        .filter(|line| line.checked)
        .filter_map(|line| {
            catalog
                .get(&line.product_id)
                .map(|p| p.price * line.quantity as i64)
        })
        .sum()
}

/// Capture the checked lines as order items with their catalog price at this
/// moment. Lines for unknown products are dropped.
pub fn order_items(catalog: &ProductCatalog, lines: &[CartLine]) -> Vec<OrderItem> {
    lines
        .iter()
        .filter(|line| line.checked)
        .filter_map(|line| {
            catalog.get(&line.product_id).map(|p| OrderItem {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                price: p.price,
            })
        })
        .collect()
}

/// Assemble the order draft for a checkout. `total = subtotal - discount +
/// shipping_cost`, clamped at zero since a fixed voucher may exceed the
/// subtotal.
pub fn build_order(
    catalog: &ProductCatalog,
    lines: &[CartLine],
    address_id: &str,
    shipping: &ShippingOption,
    voucher: Option<&Voucher>,
    seller_message: Option<String>,
) -> OrderDraft {
    let items = order_items(catalog, lines);
    let subtotal: Rupiah = items.iter().map(|i| i.price * i.quantity as i64).sum();
    let discount = calculate_discount(subtotal, voucher);
    let total = (subtotal - discount + shipping.cost).max(0);

    OrderDraft {
        items,
        address_id: address_id.to_string(),
        shipping_option: shipping.id.to_string(),
        shipping_cost: shipping.cost,
        subtotal,
        discount,
        total,
        seller_message,
        voucher_code: voucher.map(|v| v.code.clone()),
    }
}
