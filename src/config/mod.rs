pub mod credentials;
pub mod database;
pub mod logging;
pub mod settings;

use crate::error::AdminError;
use crate::services::firestore::FirestoreStore;

/// Common start-up for every script: logging, settings, connection.
pub async fn bootstrap(credentials_arg: Option<String>) -> Result<FirestoreStore, AdminError> {
    logging::init();

    let settings = settings::Settings::from_env(credentials_arg);
    if settings.emulator_host.is_none() {
        println!(
            "Using service account from {}: {}",
            settings.credentials.source,
            settings.credentials.path.display()
        );
    }

    let store = database::connect(&settings).await?;
    println!("✅ Firestore initialized\n");
    Ok(store)
}
