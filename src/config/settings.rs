use std::env;

use crate::config::credentials::{CredentialsPath, SERVICE_ACCOUNT_ENV};

/// Connection settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: CredentialsPath,
    pub emulator_host: Option<String>,
    pub emulator_project_id: String,
    pub database_id: String,
}

impl Settings {
    /// `credentials_arg` is the explicit key-file path some scripts accept.
    pub fn from_env(credentials_arg: Option<String>) -> Self {
        dotenvy::dotenv().ok();

        let credentials = CredentialsPath::resolve(credentials_arg, non_empty(SERVICE_ACCOUNT_ENV));
        let emulator_host = non_empty("FIRESTORE_EMULATOR_HOST");
        let emulator_project_id =
            env::var("FIRESTORE_PROJECT_ID").unwrap_or_else(|_| "demo-gym".to_string());
        let database_id = env::var("FIRESTORE_DATABASE").unwrap_or_else(|_| "(default)".to_string());

        Self {
            credentials,
            emulator_host,
            emulator_project_id,
            database_id,
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
