use axum::{extract::State, routing::post, Router};
use serde_json::json;
use std::sync::Arc;

use super::{to_api_error, to_api_ok, ApiResult};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", post(request_booking))
        .route("/bookings/confirm", post(confirm_booking))
        .route("/bookings/cancel", post(cancel_booking))
}

pub fn reset_route() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reset", post(reset_all))
}

/* ---------- BOOKINGS ---------- */

// POST /api/bookings - итог выбора, ждём подтверждения.
// Пустой выбор - summary: null, фаза не меняется
async fn request_booking(State(state): State<Arc<AppState>>) -> ApiResult {
    let mut session = state.session.lock().await;

    match session.request_booking() {
        Ok(summary) => Ok(to_api_ok(&session, json!({ "summary": summary }))),
        Err(e) => Err(to_api_error(&session, &e)),
    }
}

// POST /api/bookings/confirm
async fn confirm_booking(State(state): State<Arc<AppState>>) -> ApiResult {
    let mut session = state.session.lock().await;

    match session.confirm().await {
        Ok(receipt) => {
            let message = session.notice().map(|n| n.message.clone());
            Ok(to_api_ok(&session, json!({ "receipt": receipt, "message": message })))
        }
        Err(e) => Err(to_api_error(&session, &e)),
    }
}

// POST /api/bookings/cancel
async fn cancel_booking(State(state): State<Arc<AppState>>) -> ApiResult {
    let mut session = state.session.lock().await;

    match session.cancel() {
        Ok(()) => Ok(to_api_ok(&session, json!({}))),
        Err(e) => Err(to_api_error(&session, &e)),
    }
}

// POST /api/reset - сброс всех мест и записи о бронях
async fn reset_all(State(state): State<Arc<AppState>>) -> ApiResult {
    let mut session = state.session.lock().await;
    let booked_before = session.grid().booked_count();

    session.reset().await;
    tracing::info!("RESET: released {} booked seats", booked_before);

    Ok(to_api_ok(
        &session,
        json!({
            "message": "Все места сброшены",
            "details": { "seats_released": booked_before },
        }),
    ))
}
