use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    extract::ValidatedJson,
    models::Product,
    services::product_service,
    state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Only featured (or only non-featured) products.
    pub featured: Option<bool>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "List products", body = Vec<Product>),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let products = product_service::list_products(&state, query).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let product = product_service::get_product(&state, &id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = Product,
    responses(
        (status = 201, description = "Create product", body = Product),
        (status = 422, description = "Validation failure"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Product>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let product = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
