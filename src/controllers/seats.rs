use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::{to_api_error, to_api_ok, ApiResult};
use crate::models::SessionView;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/toggle", post(toggle_seat))
        .route("/seats/remove", post(remove_seat))
        .route("/seats/clear", post(clear_selection))
}

#[derive(Debug, Deserialize)]
struct SeatRequest {
    row: usize,
    column: usize,
}

// GET /api/seats
async fn get_seats(State(state): State<Arc<AppState>>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view())
}

// POST /api/seats/toggle
async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatRequest>,
) -> ApiResult {
    let mut session = state.session.lock().await;

    match session.toggle_seat(req.row, req.column) {
        Ok(outcome) => Ok(to_api_ok(&session, json!({ "outcome": outcome }))),
        Err(e) => Err(to_api_error(&session, &e)),
    }
}

// POST /api/seats/remove - убрать место из списка выбранных
async fn remove_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SeatRequest>,
) -> ApiResult {
    let mut session = state.session.lock().await;

    match session.remove_seat(req.row, req.column) {
        Ok(()) => Ok(to_api_ok(&session, json!({}))),
        Err(e) => Err(to_api_error(&session, &e)),
    }
}

// POST /api/seats/clear
async fn clear_selection(State(state): State<Arc<AppState>>) -> ApiResult {
    let mut session = state.session.lock().await;
    session.clear_selection();
    Ok(to_api_ok(&session, json!({})))
}
