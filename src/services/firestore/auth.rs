use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::credentials::ServiceAccount;
use crate::store::StoreError;

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Exchanges a signed service-account assertion for OAuth access tokens.
pub struct TokenProvider {
    client: Client,
    account: ServiceAccount,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new(client: Client, account: ServiceAccount) -> Self {
        Self {
            client,
            account,
            cached: Mutex::new(None),
        }
    }

    /// A valid bearer token, fetching a fresh one when the cached token is
    /// missing or about to expire.
    pub async fn token(&self) -> Result<String, StoreError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at - Duration::seconds(REFRESH_MARGIN_SECS) > Utc::now() {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.fetch().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    fn assertion(&self, now: DateTime<Utc>) -> Result<String, StoreError> {
        let claims = Claims {
            iss: &self.account.client_email,
            scope: DATASTORE_SCOPE,
            aud: &self.account.token_uri,
            iat: now.timestamp(),
            exp: now.timestamp() + TOKEN_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.account.private_key_id.clone();

        let key = EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())?;
        Ok(encode(&header, &claims, &key)?)
    }

    async fn fetch(&self) -> Result<AccessToken, StoreError> {
        let now = Utc::now();
        let assertion = self.assertion(now)?;

        tracing::debug!(client_email = %self.account.client_email, "requesting access token");

        let response = self
            .client
            .post(&self.account.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error) = serde_json::from_str::<TokenErrorResponse>(&error_text) {
                let message = match error.error_description {
                    Some(description) => format!("{}: {}", error.error, description),
                    None => error.error,
                };
                return Err(StoreError::AuthError(message));
            }
            return Err(StoreError::AuthError(error_text));
        }

        let token: TokenResponse = response.json().await?;
        let lifetime = token.expires_in.unwrap_or(TOKEN_LIFETIME_SECS);

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(lifetime),
        })
    }
}
