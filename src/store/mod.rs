//! In-memory session stores: orders, plus the fixed reference catalogs the
//! checkout flow reads from. All state is process-local and lost on shutdown.

pub mod addresses;
pub mod orders;
pub mod products;
pub mod vouchers;

pub use addresses::AddressBook;
pub use orders::{OrderStore, SharedOrderStore};
pub use products::{Product, ProductCatalog};
pub use vouchers::VoucherCatalog;
