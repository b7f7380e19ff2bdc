use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod doc;
pub mod meta;
pub mod orders;
pub mod products;
pub mod seed;

// Everything under /api; the root banner and /test are mounted at the top
// level by main.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(meta::hello))
        .route("/seed", post(seed::seed_products))
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}
