use mongodb::bson::doc;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    routes::products::ProductListQuery,
    serialize::serialize_doc,
    state::AppState,
    store::{DocumentId, collections},
};

pub async fn list_products(state: &AppState, query: ProductListQuery) -> AppResult<Vec<Value>> {
    let store = state.store.gateway()?;

    let mut filter = doc! {};
    if let Some(category) = query.category.filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }
    if let Some(featured) = query.featured {
        filter.insert("featured", featured);
    }

    let documents = store.find(collections::PRODUCT, filter).await?;
    Ok(documents.into_iter().map(serialize_doc).collect())
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<Value> {
    let store = state.store.gateway()?;
    let id = DocumentId::parse(id)?;

    let document = store
        .find_by_id(collections::PRODUCT, &id)
        .await?
        .ok_or(AppError::NotFound("Product"))?;

    Ok(serialize_doc(document))
}

pub async fn create_product(state: &AppState, payload: Product) -> AppResult<Value> {
    let store = state.store.gateway()?;

    let id = store.insert(collections::PRODUCT, &payload).await?;
    // Read the stored document back so the response reflects exactly what
    // was persisted.
    let document = store
        .find_by_id(collections::PRODUCT, &id)
        .await?
        .ok_or(AppError::NotFound("Product"))?;

    tracing::info!(id = %id, title = %payload.title, "product created");
    Ok(serialize_doc(document))
}
