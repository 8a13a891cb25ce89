use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::checkout::build_order;
use crate::countdown::PaymentCountdown;
use crate::qris::generate_qr_payload;
use crate::shipping::{all_shipping_options, shipping_option};
use crate::store::{AddressBook, ProductCatalog, SharedOrderStore, VoucherCatalog};
use crate::types::cart::CartLine;
use crate::types::order::{OrderPatch, Rupiah};
use crate::types::payment::{PaymentMethod, payment_method};

const SELLER_MESSAGE_MAX_CHARS: usize = 500;

#[derive(Clone)]
pub struct AppState {
    pub orders: SharedOrderStore,
    pub vouchers: Arc<VoucherCatalog>,
    pub addresses: Arc<AddressBook>,
    pub products: Arc<ProductCatalog>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartLine>,
    pub address_id: String,
    pub shipping_option: String,
    pub voucher_code: Option<String>,
    pub seller_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub subtotal: Rupiah,
    pub discount: Rupiah,
    pub shipping_cost: Rupiah,
    pub total: Rupiah,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentQuery {
    pub method: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymentInstructions {
    pub order_id: String,
    pub amount: Rupiah,
    pub remaining_secs: i64,
    pub display: String,
    pub expired: bool,
    /// `None` for an unknown method id; a neutral outcome, not an error.
    pub method: Option<PaymentMethod>,
}

fn error_json(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn health() -> &'static str {
    "healthy"
}

async fn list_products(State(state): State<AppState>) -> Response {
    Json(state.products.all()).into_response()
}

async fn list_vouchers(State(state): State<AppState>) -> Response {
    Json(state.vouchers.all()).into_response()
}

async fn list_addresses(State(state): State<AppState>) -> Response {
    Json(state.addresses.all()).into_response()
}

async fn list_shipping() -> Response {
    Json(all_shipping_options()).into_response()
}

async fn checkout(State(state): State<AppState>, Json(req): Json<CheckoutRequest>) -> Response {
    let Some(shipping) = shipping_option(&req.shipping_option) else {
        return error_json(StatusCode::BAD_REQUEST, "unknown shipping option");
    };
    if let Some(msg) = &req.seller_message {
        if msg.chars().count() > SELLER_MESSAGE_MAX_CHARS {
            return error_json(StatusCode::BAD_REQUEST, "seller message too long");
        }
    }

    // Unknown voucher codes silently apply no voucher.
    let voucher = req
        .voucher_code
        .as_deref()
        .and_then(|code| state.vouchers.find_by_code(code))
        .cloned();

    let draft = build_order(
        &state.products,
        &req.items,
        &req.address_id,
        &shipping,
        voucher.as_ref(),
        req.seller_message,
    );
    if draft.items.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "no checked items to order");
    }

    let (subtotal, discount, shipping_cost, total) =
        (draft.subtotal, draft.discount, draft.shipping_cost, draft.total);
    let order_id = state.orders.write().await.add_order(draft);
    tracing::info!(%order_id, total, "order created");

    (
        StatusCode::CREATED,
        Json(CheckoutResponse {
            order_id,
            subtotal,
            discount,
            shipping_cost,
            total,
        }),
    )
        .into_response()
}

async fn list_orders(State(state): State<AppState>) -> Response {
    let orders = state.orders.read().await.list_orders();
    Json(orders).into_response()
}

async fn get_order(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.orders.read().await.get_order(&id) {
        Some(order) => Json(order).into_response(),
        None => error_json(StatusCode::NOT_FOUND, "order not found"),
    }
}

/// Merge a partial update. 204 regardless of whether the id exists; the
/// store's silent no-op policy carries through to the HTTP surface.
async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<OrderPatch>,
) -> StatusCode {
    state.orders.write().await.update_order(&id, patch);
    StatusCode::NO_CONTENT
}

async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CancelRequest>,
) -> StatusCode {
    state.orders.write().await.cancel_order(&id, &req.reason);
    tracing::info!(order_id = %id, "order cancelled");
    StatusCode::NO_CONTENT
}

async fn payment_instructions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PaymentQuery>,
) -> Response {
    let Some(order) = state.orders.read().await.get_order(&id) else {
        return error_json(StatusCode::NOT_FOUND, "order not found");
    };

    let countdown = PaymentCountdown::new(order.created_at);
    let now = Utc::now();
    let remaining_secs = countdown.remaining_secs(now);
    let method = query.method.as_deref().and_then(payment_method);

    Json(PaymentInstructions {
        order_id: order.id,
        amount: order.total,
        remaining_secs,
        display: countdown.display(now),
        expired: remaining_secs == 0,
        method,
    })
    .into_response()
}

async fn qris_payload(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(order) = state.orders.read().await.get_order(&id) else {
        return error_json(StatusCode::NOT_FOUND, "order not found");
    };
    let payload = generate_qr_payload(&order.id, order.total, order.created_at);
    Json(json!({ "order_id": order.id, "payload": payload })).into_response()
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route("/vouchers", get(list_vouchers))
        .route("/addresses", get(list_addresses))
        .route("/shipping", get(list_shipping))
        .route("/checkout", post(checkout))
        .route("/orders", get(list_orders))
        .route("/orders/{id}", get(get_order).patch(update_order))
        .route("/orders/{id}/cancel", post(cancel_order))
        .route("/orders/{id}/payment", get(payment_instructions))
        .route("/orders/{id}/qris", get(qris_payload))
        .with_state(state)
}
