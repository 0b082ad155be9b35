use crate::modules::bookings::model::{Booking, BookingStatus};
use crate::store::{DocumentStore, Fields, Query, StoreError};

const COLLECTION_NAME: &str = "bookings";

pub struct BookingCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> BookingCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find_confirmed_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Booking>, StoreError> {
        let query = Query::collection(COLLECTION_NAME)
            .where_eq("userId", user_id)
            .where_eq("status", BookingStatus::Confirmed.as_str())
            .limit(limit);

        let docs = self.store.query(&query).await?;
        Ok(docs.into_iter().map(Booking::from_document).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<Booking>, StoreError> {
        let docs = self.store.list(COLLECTION_NAME).await?;
        Ok(docs.into_iter().map(Booking::from_document).collect())
    }

    pub async fn cancel(&self, id: &str, reason: &str) -> Result<(), StoreError> {
        let fields = Fields::new()
            .set("status", BookingStatus::Cancelled.as_str())
            .server_timestamp("cancelledAt")
            .set("cancellationReason", reason)
            .server_timestamp("updatedAt");
        self.store.update(COLLECTION_NAME, id, fields).await
    }

    pub async fn reassign_schedule(&self, id: &str, schedule_id: &str) -> Result<(), StoreError> {
        let fields = Fields::new()
            .set("scheduleId", schedule_id)
            .server_timestamp("updatedAt");
        self.store.update(COLLECTION_NAME, id, fields).await
    }
}
