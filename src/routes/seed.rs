use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, services::seed_service, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<Vec<String>>,
}

impl SeedResponse {
    pub fn already_seeded(count: u64) -> Self {
        Self {
            message: "Products already seeded".to_string(),
            count: Some(count),
            inserted: None,
        }
    }

    pub fn seeded(inserted: Vec<String>) -> Self {
        Self {
            message: "Seeded sample products".to_string(),
            count: None,
            inserted: Some(inserted),
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Seeding result", body = SeedResponse),
        (status = 500, description = "Store unavailable"),
    ),
    tag = "Seed"
)]
pub async fn seed_products(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let result = seed_service::seed_products(&state).await?;
    Ok(Json(result))
}
