//! Voucher/discount engine: pure computation from subtotal + selected voucher.
//! Testable without HTTP.

use crate::types::order::Rupiah;
use crate::types::voucher::{DiscountType, Voucher};

/// Discount amount for a subtotal under the selected voucher.
///
/// No voucher, or a subtotal below the voucher's minimum purchase, yields 0;
/// an inapplicable voucher is a neutral outcome, never an error. Percentage
/// vouchers are capped by `max_discount` when one is set. Fixed vouchers
/// return their value as-is, even above the subtotal; whoever computes a
/// total is responsible for clamping it at zero.
///
/// The voucher's expiry date is deliberately not consulted here.
pub fn calculate_discount(subtotal: Rupiah, voucher: Option<&Voucher>) -> Rupiah {
    let Some(voucher) = voucher else {
        return 0;
    };
    if subtotal < voucher.min_purchase {
        return 0;
    }
    match voucher.discount_type {
        DiscountType::Percentage => {
            let raw = subtotal * voucher.discount_value / 100;
            match voucher.max_discount {
                Some(cap) => raw.min(cap),
                None => raw,
            }
        }
        DiscountType::Fixed => voucher.discount_value,
    }
}
