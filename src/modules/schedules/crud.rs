use crate::modules::schedules::model::{ClassSchedule, NewSchedule, ReplacementSchedule};
use crate::store::{DocumentStore, StoreError};

const COLLECTION_NAME: &str = "class_schedules";

pub struct ScheduleCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ScheduleCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<ClassSchedule>, StoreError> {
        let docs = self.store.list(COLLECTION_NAME).await?;
        Ok(docs.into_iter().map(ClassSchedule::from_document).collect())
    }

    pub async fn create(&self, schedule: &NewSchedule) -> Result<String, StoreError> {
        self.store.add(COLLECTION_NAME, schedule.to_fields()).await
    }

    /// Writes the schedule under its descriptive ID, replacing any existing document.
    pub async fn put(
        &self,
        schedule: &ReplacementSchedule,
        display_order: i64,
    ) -> Result<(), StoreError> {
        self.store
            .set(COLLECTION_NAME, schedule.id, schedule.to_fields(display_order))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(COLLECTION_NAME, id).await
    }
}
