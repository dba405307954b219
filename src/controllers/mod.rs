pub mod seats;
pub mod bookings;

use axum::{http::StatusCode, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::BookingError;
use crate::services::BookingSession;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(bookings::reset_route())
}

// Каждый ответ несёт полный снимок сессии - UI перерисовывается без своей логики
type ApiResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

fn to_api_ok(session: &BookingSession, mut body: Value) -> (StatusCode, Json<Value>) {
    body["success"] = json!(true);
    body["state"] = json!(session.view());
    (StatusCode::OK, Json(body))
}

fn to_api_error(session: &BookingSession, error: &BookingError) -> (StatusCode, Json<Value>) {
    (
        error.status_code(),
        Json(json!({
            "success": false,
            "message": error.to_string(),
            "state": session.view(),
        })),
    )
}
