//! [`DocumentStore`] backed by the Firestore v1 REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value as Json};
use uuid::Uuid;

use crate::config::credentials::ServiceAccount;
use crate::store::{
    Document, DocumentStore, FieldValue, Fields, Filter, FilterOp, Query, StoreError,
};

pub mod auth;
pub mod codec;

use auth::TokenProvider;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const EMULATOR_TOKEN: &str = "owner";

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Json>,
}

#[derive(Debug, Deserialize)]
struct RunQueryRow {
    document: Option<RawDocument>,
}

enum Auth {
    ServiceAccount(TokenProvider),
    Emulator,
}

pub struct FirestoreStore {
    client: Client,
    auth: Auth,
    project_id: String,
    base_url: String,
    database_id: String,
}

impl FirestoreStore {
    pub fn new(account: ServiceAccount, database_id: String) -> Self {
        let client = Client::new();
        let project_id = account.project_id.clone();
        Self {
            auth: Auth::ServiceAccount(TokenProvider::new(client.clone(), account)),
            client,
            project_id,
            base_url: FIRESTORE_BASE_URL.to_string(),
            database_id,
        }
    }

    /// Talks to a local emulator; no token exchange takes place.
    pub fn emulator(host: &str, project_id: String, database_id: String) -> Self {
        Self {
            client: Client::new(),
            auth: Auth::Emulator,
            project_id,
            base_url: format!("http://{}/v1", host.trim_end_matches('/')),
            database_id,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Forces the first token exchange so bad credentials surface up front.
    pub async fn authenticate(&self) -> Result<(), StoreError> {
        self.bearer().await.map(|_| ())
    }

    async fn bearer(&self) -> Result<String, StoreError> {
        match &self.auth {
            Auth::ServiceAccount(provider) => provider.token().await,
            Auth::Emulator => Ok(EMULATOR_TOKEN.to_string()),
        }
    }

    fn database_name(&self) -> String {
        format!("projects/{}/databases/{}", self.project_id, self.database_id)
    }

    fn documents_url(&self) -> String {
        format!("{}/{}/documents", self.base_url, self.database_name())
    }

    fn document_name(&self, collection: &str, id: &str) -> String {
        format!("{}/documents/{}/{}", self.database_name(), collection, id)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.documents_url(), collection, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let token = self.bearer().await?;
        Ok(request
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorResponse>(&error_text) {
            Ok(error_response) => error_response.error.message,
            Err(_) => error_text,
        };
        Err(StoreError::ApiError {
            status: status.as_u16(),
            message,
        })
    }

    async fn commit(&self, write: Json) -> Result<(), StoreError> {
        let url = format!("{}:commit", self.documents_url());
        tracing::debug!(%url, "committing write");

        let response = self
            .send(self.client.post(url).json(&json!({ "writes": [write] })))
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Splits writes into plain fields, timestamp transforms and the update
    /// mask covering every touched field.
    fn build_write(&self, collection: &str, id: &str, fields: &Fields) -> (Json, Vec<String>) {
        let mut encoded = Map::new();
        let mut transforms = Vec::new();
        let mut mask = Vec::new();

        for (name, value) in fields.iter() {
            match value {
                FieldValue::Value(v) => {
                    encoded.insert(name.clone(), codec::encode_value(v));
                    mask.push(codec::field_path(name));
                }
                FieldValue::ServerTimestamp => {
                    transforms.push(json!({
                        "fieldPath": codec::field_path(name),
                        "setToServerValue": "REQUEST_TIME",
                    }));
                }
                FieldValue::Delete => mask.push(codec::field_path(name)),
            }
        }

        let mut write = json!({
            "update": {
                "name": self.document_name(collection, id),
                "fields": encoded,
            }
        });
        if !transforms.is_empty() {
            write["updateTransforms"] = Json::Array(transforms);
        }
        (write, mask)
    }

    fn to_document(raw: RawDocument) -> Result<Document, StoreError> {
        Ok(Document::new(
            codec::document_id(&raw.name)?,
            codec::decode_fields(&raw.fields)?,
        ))
    }
}

fn op_name(op: FilterOp) -> &'static str {
    match op {
        FilterOp::Equal => "EQUAL",
        FilterOp::LessThan => "LESS_THAN",
        FilterOp::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
        FilterOp::GreaterThan => "GREATER_THAN",
        FilterOp::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
    }
}

fn encode_filter(filter: &Filter) -> Json {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": codec::field_path(&filter.field) },
            "op": op_name(filter.op),
            "value": codec::encode_value(&filter.value),
        }
    })
}

fn structured_query(query: &Query) -> Json {
    let mut structured = json!({
        "from": [{ "collectionId": query.collection }],
    });

    match query.filters.as_slice() {
        [] => {}
        [single] => structured["where"] = encode_filter(single),
        many => {
            let filters: Vec<Json> = many.iter().map(encode_filter).collect();
            structured["where"] = json!({
                "compositeFilter": { "op": "AND", "filters": filters }
            });
        }
    }

    // Range filters need their field ordered first; equality-only queries
    // come back in document-ID order either way.
    let mut order_by: Vec<Json> = query
        .filters
        .iter()
        .filter(|f| f.op != FilterOp::Equal)
        .map(|f| json!({ "field": { "fieldPath": codec::field_path(&f.field) }, "direction": "ASCENDING" }))
        .take(1)
        .collect();
    order_by.push(json!({ "field": { "fieldPath": "__name__" }, "direction": "ASCENDING" }));
    structured["orderBy"] = Json::Array(order_by);

    if let Some(limit) = query.limit {
        structured["limit"] = json!(limit);
    }
    structured
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn query(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}:runQuery", self.documents_url());
        tracing::debug!(collection = %query.collection, filters = query.filters.len(), "running query");

        let body = json!({ "structuredQuery": structured_query(query) });
        let response = self.send(self.client.post(url).json(&body)).await?;
        let rows: Vec<RunQueryRow> = Self::check(response).await?.json().await?;

        rows.into_iter()
            .filter_map(|row| row.document)
            .map(Self::to_document)
            .collect()
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(collection, id);
        tracing::debug!(%url, "fetching document");

        let response = self.send(self.client.get(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let raw: RawDocument = Self::check(response).await?.json().await?;
        Self::to_document(raw).map(Some)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        if fields.has_deletes() {
            return Err(StoreError::InvalidWrite(format!(
                "delete sentinel in full write of {}/{}",
                collection, id
            )));
        }
        let (write, _) = self.build_write(collection, id, &fields);
        self.commit(write).await
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        if fields.has_deletes() {
            return Err(StoreError::InvalidWrite(format!(
                "delete sentinel in new document of {}",
                collection
            )));
        }
        let id = Uuid::new_v4().simple().to_string();
        let (mut write, _) = self.build_write(collection, &id, &fields);
        write["currentDocument"] = json!({ "exists": false });
        self.commit(write).await?;
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let (mut write, mask) = self.build_write(collection, id, &fields);
        write["updateMask"] = json!({ "fieldPaths": mask });
        write["currentDocument"] = json!({ "exists": true });

        match self.commit(write).await {
            Err(StoreError::ApiError { status: 404, .. }) => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
            other => other,
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let url = self.document_url(collection, id);
        tracing::debug!(%url, "deleting document");

        let response = self.send(self.client.delete(url)).await?;
        Self::check(response).await?;
        Ok(())
    }
}
