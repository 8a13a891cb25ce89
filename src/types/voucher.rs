use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::order::Rupiah;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is percentage points, 0-100.
    Percentage,
    /// `discount_value` is an absolute Rupiah amount.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: String,
    /// Display key the customer enters, e.g. "BATIKBARU".
    pub code: String,
    pub name: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    /// Subtotal below this yields zero discount.
    pub min_purchase: Rupiah,
    /// Cap for percentage vouchers; ignored for fixed.
    pub max_discount: Option<Rupiah>,
    /// Stored for display only; the discount engine does not check it.
    pub expiry_date: DateTime<Utc>,
}
