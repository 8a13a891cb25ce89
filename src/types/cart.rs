use serde::{Deserialize, Serialize};

/// One line of the session cart. Transient: the client holds its cart and
/// submits the lines at checkout; nothing cart-shaped is stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
    /// Only checked lines count toward the subtotal.
    pub checked: bool,
}
