use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer Rupiah amount. Catalog prices are whole Rupiah, so there is no
/// fractional unit to carry.
pub type Rupiah = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    /// Unit price captured from the catalog at checkout time.
    pub price: Rupiah,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub address_id: String,
    pub shipping_option: String,
    pub shipping_cost: Rupiah,
    pub subtotal: Rupiah,
    pub discount: Rupiah,
    pub total: Rupiah,
    pub seller_message: Option<String>,
    pub voucher_code: Option<String>,
    pub status: OrderStatus,
    pub cancelled_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Everything the caller supplies at checkout; the store stamps `id`,
/// `created_at` and the initial `pending` status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub address_id: String,
    pub shipping_option: String,
    pub shipping_cost: Rupiah,
    pub subtotal: Rupiah,
    pub discount: Rupiah,
    pub total: Rupiah,
    pub seller_message: Option<String>,
    pub voucher_code: Option<String>,
}

/// Partial update merged into an existing order. Fields left `None` keep
/// their current value. Status legality is a caller convention, not checked
/// here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub seller_message: Option<String>,
}
