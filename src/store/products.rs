use serde::Serialize;

use crate::types::order::Rupiah;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub motif: &'static str,
    pub price: Rupiah,
}

/// Static product catalog. The storefront treats this as fixed display data;
/// checkout only needs it to price cart lines.
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn seed() -> Self {
        let products = vec![
            Product {
                id: "1",
                name: "Batik Tulis Parang Rusak",
                motif: "Parang",
                price: 2_300_000,
            },
            Product {
                id: "2",
                name: "Batik Cap Mega Mendung",
                motif: "Mega Mendung",
                price: 450_000,
            },
            Product {
                id: "3",
                name: "Batik Tulis Sekar Jagad",
                motif: "Sekar Jagad",
                price: 1_750_000,
            },
            Product {
                id: "4",
                name: "Batik Tulis Sidomukti",
                motif: "Sidomukti",
                price: 1_200_000,
            },
            Product {
                id: "5",
                name: "Batik Cap Kawung",
                motif: "Kawung",
                price: 350_000,
            },
            Product {
                id: "6",
                name: "Batik Tulis Truntum",
                motif: "Truntum",
                price: 980_000,
            },
            Product {
                id: "7",
                name: "Batik Cap Sogan Klasik",
                motif: "Sogan",
                price: 420_000,
            },
            Product {
                id: "8",
                name: "Batik Tulis Lasem Tiga Negeri",
                motif: "Lasem",
                price: 2_750_000,
            },
        ];
        Self { products }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
