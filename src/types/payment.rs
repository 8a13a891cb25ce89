use serde::Serialize;

/// Account details for one payment channel. A closed union instead of a
/// method-id-keyed bag of loose fields, so every consumer matches on the
/// variant rather than probing for per-type keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentChannel {
    Bank {
        account_number: &'static str,
        account_name: &'static str,
    },
    EWallet {
        phone: &'static str,
    },
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub label: &'static str,
    pub channel: PaymentChannel,
}

const STORE_ACCOUNT_NAME: &str = "PT Batik Nusantara";
const STORE_EWALLET_PHONE: &str = "081234567890";

/// Lookup a payment method descriptor by id. Unknown ids yield `None`; the
/// caller treats that as a neutral outcome, not an error.
pub fn payment_method(id: &str) -> Option<PaymentMethod> {
    let method = match id {
        "bca" => PaymentMethod {
            id: "bca",
            label: "Transfer Bank BCA",
            channel: PaymentChannel::Bank {
                account_number: "1234567890",
                account_name: STORE_ACCOUNT_NAME,
            },
        },
        "mandiri" => PaymentMethod {
            id: "mandiri",
            label: "Transfer Bank Mandiri",
            channel: PaymentChannel::Bank {
                account_number: "9876543210",
                account_name: STORE_ACCOUNT_NAME,
            },
        },
        "gopay" => PaymentMethod {
            id: "gopay",
            label: "GoPay",
            channel: PaymentChannel::EWallet {
                phone: STORE_EWALLET_PHONE,
            },
        },
        "ovo" => PaymentMethod {
            id: "ovo",
            label: "OVO",
            channel: PaymentChannel::EWallet {
                phone: STORE_EWALLET_PHONE,
            },
        },
        "card" => PaymentMethod {
            id: "card",
            label: "Kartu Kredit / Debit",
            channel: PaymentChannel::Card,
        },
        _ => return None,
    };
    Some(method)
}
