use thiserror::Error;

use crate::config::credentials::CredentialsError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error("Failed to initialize Firestore: {0}")]
    Init(StoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("User '{0}' not found")]
    UserNotFound(String),
    #[error("Plan '{name}' not found")]
    PlanNotFound { name: String, available: Vec<String> },
    #[error("No confirmed bookings to cancel")]
    NoConfirmedBookings,
    #[error("Invalid arguments: {0}")]
    InvalidArgs(#[from] validator::ValidationErrors),
    #[error("Usage: {0}")]
    Usage(String),
}
