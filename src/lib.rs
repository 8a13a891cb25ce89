pub mod api;
pub mod checkout;
pub mod config;
pub mod countdown;
pub mod discount;
pub mod qris;
pub mod shipping;
pub mod store;
pub mod types;
