//! HTTP executor for assembled query documents.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::query::page_query;
use crate::response::{Connection, PageVariables, RawResponse};

/// Executor configuration.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Default headers applied to every request.
    pub headers: HeaderMap,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            headers,
            timeout: Duration::from_secs(30),
        }
    }
}

/// API client builder.
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    endpoint: String,
    config: ApiClientConfig,
}

impl ApiClientBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            config: ApiClientConfig::default(),
        }
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.headers.insert(name, value);
        self
    }

    /// Add a bearer token header.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        if let Ok(header) = HeaderValue::from_str(&value) {
            self.config
                .headers
                .insert(reqwest::header::AUTHORIZATION, header);
        }
        self
    }

    /// Set timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        ApiClient::with_config(self.endpoint, self.config)
    }
}

/// GraphQL API client.
///
/// Retries, if any, belong to the caller; every method performs exactly one
/// HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client with custom configuration.
    pub fn with_config(
        endpoint: impl Into<String>,
        config: ApiClientConfig,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .default_headers(config.headers.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Execute a query document and return the full `{data, errors}` response.
    pub async fn execute<V, T>(
        &self,
        query: &str,
        variables: &V,
    ) -> Result<RawResponse<T>, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut body = serde_json::Map::new();
        body.insert(
            "query".to_string(),
            serde_json::Value::String(query.to_string()),
        );
        body.insert("variables".to_string(), serde_json::to_value(variables)?);

        debug!(endpoint = %self.endpoint, "executing GraphQL query");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::Value::Object(body))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status,
                body: truncate_body(&bytes),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Execute and return data only, converting GraphQL-level errors into
    /// [`ClientError::Api`] with the raw payload attached.
    pub async fn execute_strict<V, T>(&self, query: &str, variables: &V) -> Result<T, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response: RawResponse<serde_json::Value> = self.execute(query, variables).await?;
        if !response.errors.is_empty() {
            return Err(ClientError::from_errors(response.errors, response.data));
        }
        let data = response.data.ok_or_else(|| ClientError::Protocol {
            message: "missing GraphQL data".to_string(),
        })?;
        Ok(serde_json::from_value(data)?)
    }

    /// Assemble and execute a paginated query for `resource`.
    ///
    /// `fields` uses the compact descriptor notation; `show_deleted`
    /// controls whether the `$showDeleted` variable is part of the document.
    pub async fn query_page<T>(
        &self,
        resource: &str,
        fields: &[&str],
        show_deleted: bool,
        variables: &PageVariables,
    ) -> Result<Connection<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let query = page_query(resource, fields, show_deleted);
        let mut data: serde_json::Value = self.execute_strict(&query, variables).await?;
        let connection = data
            .get_mut(resource)
            .map(serde_json::Value::take)
            .ok_or_else(|| ClientError::Protocol {
                message: format!("missing \"{resource}\" field in response data"),
            })?;
        Ok(serde_json::from_value(connection)?)
    }
}

fn truncate_body(bytes: &[u8]) -> String {
    const MAX_LEN: usize = 4096;
    let mut body = String::from_utf8_lossy(bytes).to_string();
    if body.len() > MAX_LEN {
        // Back off to a char boundary; byte MAX_LEN may sit inside a
        // multi-byte character.
        let mut cut = MAX_LEN;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}
