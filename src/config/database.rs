use crate::config::credentials::ServiceAccount;
use crate::config::settings::Settings;
use crate::error::AdminError;
use crate::services::firestore::FirestoreStore;

/// Builds the Firestore client and authenticates once before any script work.
pub async fn connect(settings: &Settings) -> Result<FirestoreStore, AdminError> {
    if let Some(host) = &settings.emulator_host {
        tracing::info!(%host, project = %settings.emulator_project_id, "using Firestore emulator");
        return Ok(FirestoreStore::emulator(
            host,
            settings.emulator_project_id.clone(),
            settings.database_id.clone(),
        ));
    }

    let path = settings.credentials.ensure_exists()?;
    let account = ServiceAccount::from_file(path)?;
    let store = FirestoreStore::new(account, settings.database_id.clone());

    store.authenticate().await.map_err(AdminError::Init)?;
    tracing::info!(project = %store.project_id(), "Firestore client initialized");

    Ok(store)
}
