//! The document database the maintenance scripts run against.
//!
//! [`DocumentStore`] is the full surface the scripts rely on: equality and
//! range filtered queries with an optional limit, per-document get, set,
//! add, update and delete, plus the server-timestamp and delete-field
//! sentinels carried by [`FieldValue`].

use async_trait::async_trait;

pub mod document;
pub mod error;
pub mod memory;
pub mod query;
pub mod value;

pub use document::{Document, FieldValue, Fields};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{Filter, FilterOp, Query};
pub use value::Value;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Matching documents ordered by document ID.
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Creates or fully overwrites the document.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    /// Creates a document under a generated ID and returns that ID.
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError>;

    /// Merges `fields` into an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        self.query(&Query::collection(collection)).await
    }
}
