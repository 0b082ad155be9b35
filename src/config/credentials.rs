use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SERVICE_ACCOUNT_ENV: &str = "FIREBASE_SERVICE_ACCOUNT";
pub const DEFAULT_SERVICE_ACCOUNT_PATH: &str = "scripts/firebase-service-account.json";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Credentials file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid service account file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Where the credentials path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsSource {
    Argument,
    Environment,
    Default,
}

impl fmt::Display for CredentialsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsSource::Argument => write!(f, "command-line argument"),
            CredentialsSource::Environment => write!(f, "{}", SERVICE_ACCOUNT_ENV),
            CredentialsSource::Default => write!(f, "default path"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsPath {
    pub path: PathBuf,
    pub source: CredentialsSource,
}

impl CredentialsPath {
    /// Explicit argument first, then the environment, then the default path.
    pub fn resolve(argument: Option<String>, env_value: Option<String>) -> Self {
        match (argument, env_value) {
            (Some(path), _) => Self {
                path: path.into(),
                source: CredentialsSource::Argument,
            },
            (None, Some(path)) => Self {
                path: path.into(),
                source: CredentialsSource::Environment,
            },
            (None, None) => Self {
                path: DEFAULT_SERVICE_ACCOUNT_PATH.into(),
                source: CredentialsSource::Default,
            },
        }
    }

    pub fn ensure_exists(&self) -> Result<&Path, CredentialsError> {
        if self.path.exists() {
            Ok(&self.path)
        } else {
            Err(CredentialsError::Missing(self.path.clone()))
        }
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a Google service-account key file this crate uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccount {
    pub fn from_file(path: &Path) -> Result<Self, CredentialsError> {
        if !path.exists() {
            return Err(CredentialsError::Missing(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|source| CredentialsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CredentialsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
