use crate::modules::plans::model::{NewPlan, Plan};
use crate::store::{DocumentStore, Fields, Query, StoreError};

const COLLECTION_NAME: &str = "plans";

pub struct PlanCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> PlanCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find_active_by_name(&self, name: &str) -> Result<Option<Plan>, StoreError> {
        let query = Query::collection(COLLECTION_NAME)
            .where_eq("name", name)
            .where_eq("active", true)
            .limit(1);

        let mut docs = self.store.query(&query).await?;
        Ok(docs.pop().map(Plan::from_document))
    }

    pub async fn find_active(&self) -> Result<Vec<Plan>, StoreError> {
        let query = Query::collection(COLLECTION_NAME).where_eq("active", true);
        let docs = self.store.query(&query).await?;
        Ok(docs.into_iter().map(Plan::from_document).collect())
    }

    pub async fn find_all(&self) -> Result<Vec<Plan>, StoreError> {
        let docs = self.store.list(COLLECTION_NAME).await?;
        Ok(docs.into_iter().map(Plan::from_document).collect())
    }

    pub async fn create(&self, plan: &NewPlan) -> Result<String, StoreError> {
        self.store.add(COLLECTION_NAME, plan.to_fields()).await
    }

    /// `None` is written as null (unlimited).
    pub async fn set_classes_per_month(
        &self,
        id: &str,
        classes_per_month: Option<i64>,
    ) -> Result<(), StoreError> {
        let fields = Fields::new().set("classesPerMonth", classes_per_month);
        self.store.update(COLLECTION_NAME, id, fields).await
    }
}
