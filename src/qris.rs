//! Pseudo-QRIS payload generation. Emits an EMV-style TLV string from order
//! attributes for the QR image renderer to consume. This is a cosmetic
//! emulation of the QRIS format, not spec-compliant EMV-QR.

use chrono::{DateTime, Utc};

use crate::types::order::Rupiah;

const MERCHANT_ID: &str = "ID.CO.BATIKNUSANTARA.WWW";
const MERCHANT_NAME: &str = "BATIK NUSANTARA";
const MERCHANT_CITY: &str = "YOGYAKARTA";
// Merchant category code for handicraft retail.
const MERCHANT_CATEGORY: &str = "5947";
const CURRENCY_IDR: &str = "360";

/// One TLV field: tag, two-digit length, value. All values here stay well
/// under 100 characters.
fn tlv(tag: &str, value: &str) -> String {
    format!("{tag}{:02}{value}", value.len())
}

/// Build the QR payload for a payment page. Deterministic: the same order
/// id, total and creation time always produce the same string, and every
/// input is embedded so changing any of them changes the output.
pub fn generate_qr_payload(order_id: &str, total: Rupiah, created_at: DateTime<Utc>) -> String {
    let date = created_at.format("%Y%m%d").to_string();
    let time = created_at.format("%H%M%S").to_string();
    let amount = total.to_string();

    let merchant_account = tlv("00", MERCHANT_ID) + &tlv("01", order_id);
    let additional_data = tlv("01", order_id) + &tlv("07", &date) + &tlv("08", &time);

    let mut payload = String::new();
    payload.push_str(&tlv("00", "01")); // payload format indicator
    payload.push_str(&tlv("01", "12")); // dynamic QR
    payload.push_str(&tlv("26", &merchant_account));
    payload.push_str(&tlv("52", MERCHANT_CATEGORY));
    payload.push_str(&tlv("53", CURRENCY_IDR));
    payload.push_str(&tlv("54", &amount));
    payload.push_str(&tlv("58", "ID"));
    payload.push_str(&tlv("59", MERCHANT_NAME));
    payload.push_str(&tlv("60", MERCHANT_CITY));
    payload.push_str(&tlv("62", &additional_data));
    // CRC tag covers everything up to and including its own tag+length.
    payload.push_str("6304");
    let crc = crc16_ccitt(payload.as_bytes());
    payload.push_str(&format!("{crc:04X}"));
    payload
}

/// CRC-16/CCITT-FALSE (poly 0x1021, init 0xFFFF), the checksum EMV QR uses.
fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}
