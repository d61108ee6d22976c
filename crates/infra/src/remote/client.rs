//! Remote store client shared by the record/task/settings adapters

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempo_domain::{Result, TempoError};
use tracing::{debug, instrument};

use crate::http::HttpClient;

/// Configuration for the hosted-backend client
#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    /// Base URL of the backend (e.g. `https://xyz.supabase.co`).
    pub base_url: String,
    /// Project API key, sent as the `apikey` header.
    pub api_key: String,
    /// Bearer token for the signed-in user. Falls back to the API key
    /// when the session has no dedicated token.
    pub access_token: Option<String>,
    /// Timeout for API requests.
    pub timeout: Duration,
    /// Max attempts for transient failures.
    pub max_attempts: usize,
}

impl Default for RemoteStoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            access_token: None,
            timeout: Duration::from_secs(30),
            max_attempts: 3,
        }
    }
}

/// Error payload shape returned by the backend
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// REST client for the hosted backend.
///
/// One instance implements all three store ports; the per-table logic
/// lives in the sibling modules.
#[derive(Debug)]
pub struct RemoteStore {
    http: HttpClient,
    base_url: String,
}

impl RemoteStore {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns `TempoError::Config` for an empty base URL or a key that
    /// cannot be encoded as a header value.
    pub fn new(config: RemoteStoreConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(TempoError::Config("remote store base URL is empty".into()));
        }

        let mut headers = HeaderMap::new();
        let token = config.access_token.as_deref().unwrap_or(&config.api_key);
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| TempoError::Config(format!("invalid api key: {e}")))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| TempoError::Config(format!("invalid access token: {e}")))?,
        );

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .default_headers(headers)
            .user_agent("tempo-desktop")
            .build()?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Endpoint URL for a table, with optional PostgREST query suffix.
    pub(crate) fn endpoint(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/rest/v1/{table}", self.base_url)
        } else {
            format!("{}/rest/v1/{table}?{query}", self.base_url)
        }
    }

    /// GET a list of rows.
    #[instrument(skip(self))]
    pub(crate) async fn get_rows<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let response = self.http.send(self.http.request(Method::GET, url)).await?;
        Self::decode_rows(response).await
    }

    /// Execute a write (POST/PATCH) and return the representation rows.
    #[instrument(skip(self, body))]
    pub(crate) async fn write_rows<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<Vec<T>> {
        let request = self
            .http
            .request(method, url)
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.http.send(request).await?;
        Self::decode_rows(response).await
    }

    /// Execute a write that returns exactly one row.
    pub(crate) async fn write_one<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<T> {
        self.write_rows(method, url, body)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TempoError::Store("remote store returned no rows for a write".into()))
    }

    /// Execute a DELETE.
    #[instrument(skip(self))]
    pub(crate) async fn delete(&self, url: &str) -> Result<()> {
        let response = self.http.send(self.http.request(Method::DELETE, url)).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::error_from_response(response).await)
    }

    async fn decode_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| TempoError::Store(format!("malformed response body: {e}")))?;
        debug!(count = rows.len(), "decoded rows from remote store");
        Ok(rows)
    }

    /// Map a non-2xx response to a domain error carrying the backend's
    /// human-readable message.
    async fn error_from_response(response: Response) -> TempoError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<RemoteErrorBody>(&body)
            .ok()
            .and_then(|err| match (err.message, err.details) {
                (Some(message), Some(details)) => Some(format!("{message} ({details})")),
                (Some(message), None) => Some(message),
                (None, details) => details,
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });

        if status == reqwest::StatusCode::NOT_FOUND {
            TempoError::NotFound(message)
        } else {
            TempoError::Store(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> RemoteStoreConfig {
        RemoteStoreConfig {
            base_url: base.to_string(),
            api_key: "anon-key".to_string(),
            ..RemoteStoreConfig::default()
        }
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let err = RemoteStore::new(config("")).unwrap_err();
        assert!(matches!(err, TempoError::Config(_)));
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let store = RemoteStore::new(config("https://example.test/")).unwrap();
        assert_eq!(store.endpoint("tasks", ""), "https://example.test/rest/v1/tasks");
        assert_eq!(
            store.endpoint("time_records", "select=*&order=start_time.desc"),
            "https://example.test/rest/v1/time_records?select=*&order=start_time.desc"
        );
    }
}
