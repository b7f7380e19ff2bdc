use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;

use crate::{
    error::AppResult, extract::ValidatedJson, models::Order, services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = Order,
    responses(
        (status = 201, description = "Create order", body = Order),
        (status = 400, description = "Item references a malformed or unknown product id"),
        (status = 422, description = "Validation failure"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Order>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let order = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
