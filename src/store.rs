use std::fmt;
use std::time::Duration;

use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::ClientOptions,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};

pub mod collections {
    pub const PRODUCT: &str = "product";
    pub const ORDER: &str = "order";
}

/// Store-generated document identifier. The native `ObjectId` stays inside
/// this module; callers only ever see the 24-char hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    pub fn parse(raw: &str) -> AppResult<Self> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| AppError::InvalidId(raw.to_string()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// Injected store handle: a live gateway or a typed "not configured" marker.
/// Handlers never see a nullable connection.
#[derive(Clone)]
pub enum Store {
    Ready(DocumentStore),
    Unavailable,
}

impl Store {
    pub fn gateway(&self) -> AppResult<&DocumentStore> {
        match self {
            Store::Ready(store) => Ok(store),
            Store::Unavailable => Err(AppError::StoreUnavailable),
        }
    }
}

/// Gateway over one MongoDB database. Entities go in as plain documents
/// (the `_id` is generated here, on insert) and come back out as documents
/// for the serialization layer to shape.
#[derive(Clone)]
pub struct DocumentStore {
    db: Database,
}

pub async fn connect(url: &str, database: &str) -> Result<DocumentStore, mongodb::error::Error> {
    let mut options = ClientOptions::parse(url).await?;
    options.app_name = Some("vistro-api".to_string());
    options.max_pool_size = Some(20);
    options.min_pool_size = Some(1);
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(30));

    let client = Client::with_options(options)?;
    tracing::info!(database, "store handle created");

    Ok(DocumentStore {
        db: client.database(database),
    })
}

impl DocumentStore {
    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }

    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        entity: &T,
    ) -> AppResult<DocumentId> {
        let mut document = mongodb::bson::to_document(entity)?;
        let id = ObjectId::new();
        document.insert("_id", id);

        self.collection(collection).insert_one(document).await?;

        tracing::debug!(collection, id = %id.to_hex(), "document inserted");
        Ok(DocumentId(id))
    }

    pub async fn find_by_id(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> AppResult<Option<Document>> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": id.0 })
            .await?;
        Ok(found)
    }

    /// Flat equality filter; insertion order of the results is not
    /// guaranteed.
    pub async fn find(&self, collection: &str, filter: Document) -> AppResult<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).await?;
        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    pub async fn count(&self, collection: &str, filter: Document) -> AppResult<u64> {
        let count = self
            .collection(collection)
            .count_documents(filter)
            .await?;
        Ok(count)
    }

    /// Raw driver result so the diagnostic endpoint can report failures
    /// instead of surfacing them.
    pub async fn collection_names(&self) -> Result<Vec<String>, mongodb::error::Error> {
        self.db.list_collection_names().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_hex() {
        let id = DocumentId::parse("65f0123456789abcdef01234").unwrap();
        assert_eq!(id.to_string(), "65f0123456789abcdef01234");
    }

    #[test]
    fn parse_rejects_malformed_id() {
        let err = DocumentId::parse("not-an-object-id").unwrap_err();
        assert!(matches!(err, AppError::InvalidId(raw) if raw == "not-an-object-id"));
    }

    #[test]
    fn parse_rejects_short_hex() {
        assert!(DocumentId::parse("65f0").is_err());
    }

    #[test]
    fn unavailable_store_has_no_gateway() {
        let store = Store::Unavailable;
        assert!(matches!(store.gateway(), Err(AppError::StoreUnavailable)));
    }
}
