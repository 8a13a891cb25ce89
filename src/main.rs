use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use batik_market::api::routes::{AppState, app_router};
use batik_market::config::Config;
use batik_market::store::{AddressBook, OrderStore, ProductCatalog, SharedOrderStore, VoucherCatalog};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("batik_market=info".parse().unwrap()))
        .init();

    let config = Config::from_env();

    let orders: SharedOrderStore = Arc::new(RwLock::new(OrderStore::new()));
    let app_state = AppState {
        orders,
        vouchers: Arc::new(VoucherCatalog::seed()),
        addresses: Arc::new(AddressBook::seed()),
        products: Arc::new(ProductCatalog::seed()),
    };

    let app = app_router(app_state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    tracing::info!(addr = %config.bind_addr, "batik market listening");
    axum::serve(listener, app).await.unwrap();
}
