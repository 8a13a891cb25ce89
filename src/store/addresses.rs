use crate::types::address::Address;

/// Read-only address book. Orders reference entries by id but never own
/// them; a missing id simply resolves to `None`.
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    pub fn seed() -> Self {
        let addresses = vec![
            Address {
                id: "addr-1".to_string(),
                label: "Rumah".to_string(),
                recipient: "Dewi Lestari".to_string(),
                phone: "081298765432".to_string(),
                street: "Jl. Malioboro No. 52".to_string(),
                city: "Yogyakarta".to_string(),
                province: "DI Yogyakarta".to_string(),
                postal_code: "55213".to_string(),
            },
            Address {
                id: "addr-2".to_string(),
                label: "Kantor".to_string(),
                recipient: "Dewi Lestari".to_string(),
                phone: "081298765432".to_string(),
                street: "Jl. Jend. Sudirman Kav. 21".to_string(),
                city: "Jakarta Selatan".to_string(),
                province: "DKI Jakarta".to_string(),
                postal_code: "12920".to_string(),
            },
        ];
        Self { addresses }
    }

    pub fn all(&self) -> &[Address] {
        &self.addresses
    }

    pub fn get(&self, id: &str) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }
}
