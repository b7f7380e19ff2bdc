use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::Order,
    serialize::serialize_doc,
    state::AppState,
    store::{DocumentId, collections},
};

/// Every item must reference an existing product before anything is written;
/// the scan stops at the first bad reference, so a rejected order leaves
/// both collections untouched.
pub async fn create_order(state: &AppState, payload: Order) -> AppResult<Value> {
    let store = state.store.gateway()?;

    for item in &payload.items {
        let product_id = DocumentId::parse(&item.product_id)?;
        store
            .find_by_id(collections::PRODUCT, &product_id)
            .await?
            .ok_or_else(|| AppError::UnknownProduct(item.product_id.clone()))?;
    }

    let id = store.insert(collections::ORDER, &payload).await?;
    let document = store
        .find_by_id(collections::ORDER, &id)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    tracing::info!(id = %id, items = payload.items.len(), "order created");
    Ok(serialize_doc(document))
}
