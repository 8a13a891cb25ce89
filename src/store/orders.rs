use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::types::order::{Order, OrderDraft, OrderPatch, OrderStatus};

// Type alias for shared OrderStore state
pub type SharedOrderStore = Arc<RwLock<OrderStore>>;

/// Session-scoped order collection. Append-only: orders are never removed,
/// and nothing after creation may change except `status`, `seller_message`
/// and the cancellation reason.
pub struct OrderStore {
    orders: Vec<Order>,
    // Millis value used by the last generated id. Ids must stay unique even
    // when two orders land in the same wall-clock millisecond.
    last_id_ms: i64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            last_id_ms: 0,
        }
    }

    /// Stamp identity and creation time onto a draft, append it, and return
    /// the new id. The draft is trusted to be self-consistent; no amount
    /// validation happens here.
    pub fn add_order(&mut self, draft: OrderDraft) -> String {
        let now = Utc::now();
        // Force the id millis strictly monotonic so rapid-fire creation
        // within one millisecond still yields distinct ids.
        let id_ms = now.timestamp_millis().max(self.last_id_ms + 1);
        self.last_id_ms = id_ms;
        let id = format!("ORD-{id_ms}");

        let order = Order {
            id: id.clone(),
            items: draft.items,
            address_id: draft.address_id,
            shipping_option: draft.shipping_option,
            shipping_cost: draft.shipping_cost,
            subtotal: draft.subtotal,
            discount: draft.discount,
            total: draft.total,
            seller_message: draft.seller_message,
            voucher_code: draft.voucher_code,
            status: OrderStatus::Pending,
            cancelled_reason: None,
            created_at: now,
        };
        self.orders.push(order);
        id
    }

    pub fn get_order(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    /// All orders in insertion order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// Merge patch fields into the matching order. Unknown ids are a silent
    /// no-op; any status value is accepted (transition legality is a caller
    /// convention).
    pub fn update_order(&mut self, id: &str, patch: OrderPatch) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
            if let Some(status) = patch.status {
                order.status = status;
            }
            if let Some(message) = patch.seller_message {
                order.seller_message = Some(message);
            }
        }
    }

    /// Cancel an order, recording why. Silent no-op on unknown ids.
    pub fn cancel_order(&mut self, id: &str, reason: &str) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
            order.status = OrderStatus::Cancelled;
            order.cancelled_reason = Some(reason.to_string());
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
