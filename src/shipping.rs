use serde::Serialize;

use crate::types::order::Rupiah;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub id: &'static str,
    pub label: &'static str,
    pub cost: Rupiah,
}

/// Display table mapping canonical shipping ids to label + cost. Unknown ids
/// resolve to `None`.
pub fn shipping_option(id: &str) -> Option<ShippingOption> {
    let option = match id {
        "reguler" => ShippingOption {
            id: "reguler",
            label: "Reguler (3-5 hari)",
            cost: 15_000,
        },
        "express" => ShippingOption {
            id: "express",
            label: "Express (1-2 hari)",
            cost: 30_000,
        },
        "sameday" => ShippingOption {
            id: "sameday",
            label: "Same Day (tiba hari ini)",
            cost: 50_000,
        },
        _ => return None,
    };
    Some(option)
}

pub fn all_shipping_options() -> Vec<ShippingOption> {
    ["reguler", "express", "sameday"]
        .iter()
        .filter_map(|id| shipping_option(id))
        .collect()
}
