use crate::modules::users::model::User;
use crate::store::{DocumentStore, Fields, Query, StoreError};

const COLLECTION_NAME: &str = "users";

pub struct UserCrud<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> UserCrud<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = Query::collection(COLLECTION_NAME)
            .where_eq("email", email)
            .limit(1);

        let mut docs = self.store.query(&query).await?;
        Ok(docs.pop().map(User::from_document))
    }

    pub async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let docs = self.store.list(COLLECTION_NAME).await?;
        Ok(docs.into_iter().map(User::from_document).collect())
    }

    pub async fn update(&self, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.store.update(COLLECTION_NAME, id, fields).await
    }
}
