use chrono::{DateTime, Utc};

use crate::store::{DocumentStore, FilterOp, Query, StoreError};

pub const NOTIFICATIONS: &str = "notifications";
pub const SCHEDULED_NOTIFICATIONS: &str = "scheduled_notifications";

pub struct NotificationCrud<'a> {
    store: &'a dyn DocumentStore,
    collection: &'static str,
}

impl<'a> NotificationCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore, collection: &'static str) -> Self {
        Self { store, collection }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    /// IDs of delivered notifications whose `sentAt` is at or before `cutoff`.
    pub async fn find_sent_before(
        &self,
        cutoff: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<String>, StoreError> {
        let query = Query::collection(self.collection)
            .where_eq("sent", true)
            .where_op("sentAt", FilterOp::LessThanOrEqual, cutoff)
            .limit(limit);

        let docs = self.store.query(&query).await?;
        Ok(docs.into_iter().map(|d| d.id).collect())
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(self.collection, id).await
    }
}
