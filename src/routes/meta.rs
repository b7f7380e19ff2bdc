use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{state::AppState, store::Store};

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub brand: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = RootResponse)),
    tag = "Meta"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        brand: "Vistro".to_string(),
        message: "Vistro backend is running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/hello",
    responses((status = 200, description = "Greeting", body = MessageResponse)),
    tag = "Meta"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the Vistro backend API!".to_string(),
    })
}

/// Diagnostic probe. Store failures are reported inside the payload instead
/// of failing the request; every other endpoint surfaces them as errors.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Backend and store diagnostics", body = DiagnosticsResponse)),
    tag = "Meta"
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if let Store::Ready(store) = &state.store {
        response.database = "available".to_string();
        response.database_url = Some("set".to_string());
        response.database_name = Some(store.database_name().to_string());
        response.connection_status = "connected".to_string();

        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(10);
                response.collections = names;
                response.database = "connected and working".to_string();
            }
            Err(err) => {
                let detail: String = err.to_string().chars().take(50).collect();
                response.database = format!("connected but error: {detail}");
            }
        }
    }

    Json(response)
}
