use chrono::{TimeZone, Utc};

use crate::types::voucher::{DiscountType, Voucher};

/// Fixed voucher catalog, read-only reference data for the session.
pub struct VoucherCatalog {
    vouchers: Vec<Voucher>,
}

impl VoucherCatalog {
    pub fn seed() -> Self {
        let vouchers = vec![
            Voucher {
                id: "v1".to_string(),
                code: "BATIKBARU".to_string(),
                name: "Diskon Pengguna Baru".to_string(),
                description: "Diskon 10% untuk pembelian pertama, maks. Rp50.000".to_string(),
                discount_type: DiscountType::Percentage,
                discount_value: 10,
                min_purchase: 100_000,
                max_discount: Some(50_000),
                expiry_date: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
            },
            Voucher {
                id: "v2".to_string(),
                code: "HEMAT25K".to_string(),
                name: "Potongan Rp25.000".to_string(),
                description: "Potongan langsung Rp25.000, min. belanja Rp150.000".to_string(),
                discount_type: DiscountType::Fixed,
                discount_value: 25_000,
                min_purchase: 150_000,
                max_discount: None,
                expiry_date: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
            },
            Voucher {
                id: "v3".to_string(),
                code: "SULTAN15".to_string(),
                name: "Diskon Belanja Premium".to_string(),
                description: "Diskon 15% untuk belanja di atas Rp1.000.000, maks. Rp150.000"
                    .to_string(),
                discount_type: DiscountType::Percentage,
                discount_value: 15,
                min_purchase: 1_000_000,
                max_discount: Some(150_000),
                expiry_date: Utc.with_ymd_and_hms(2026, 6, 30, 23, 59, 59).unwrap(),
            },
        ];
        Self { vouchers }
    }

    pub fn all(&self) -> &[Voucher] {
        &self.vouchers
    }

    /// Case-insensitive lookup by the code the customer enters.
    pub fn find_by_code(&self, code: &str) -> Option<&Voucher> {
        self.vouchers
            .iter()
            .find(|v| v.code.eq_ignore_ascii_case(code))
    }
}
