use crate::error::AdminError;
use crate::modules::settings::model::{self, ConfigDocument};
use crate::store::DocumentStore;

const COLLECTION_NAME: &str = "config";

/// Writes every configuration document, overwriting existing ones.
pub async fn seed(store: &dyn DocumentStore) -> Result<Vec<ConfigDocument>, AdminError> {
    let documents = model::all();

    for doc in &documents {
        store.set(COLLECTION_NAME, doc.id, doc.fields.clone()).await?;
        tracing::info!(id = doc.id, fields = doc.fields.len(), "config document written");
    }

    Ok(documents)
}
