use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Firestore API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Authentication failed: {0}")]
    AuthError(String),
    #[error("Token signing failed: {0}")]
    SigningError(#[from] jsonwebtoken::errors::Error),
    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: String },
    #[error("Invalid write: {0}")]
    InvalidWrite(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
