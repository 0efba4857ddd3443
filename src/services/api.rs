use crate::config::Config;
use crate::models::{catalog::NewOrder, error::AppError, order::Order, summary::Summary};
use serde::de::DeserializeOwned;

const API_KEY_HEADER: &str = "X-API-Key";

// API CONFIGURATION
/// Configuration for the orders backend client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    api_key: Option<String>,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Configuration baked in at build time.
    pub fn from_env() -> Self {
        let builder = Self::builder().base_url(Config::api_url());
        match Config::api_key() {
            Some(key) => builder.api_key(key).build(),
            None => builder.build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn summary_url(&self) -> String {
        format!("{}/orders/summary", self.base_url)
    }

    pub fn orders_url(&self, limit: u32) -> String {
        format!("{}/orders/?limit={limit}", self.base_url)
    }

    pub fn create_order_url(&self) -> String {
        format!("{}/orders/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the backend base URL. A trailing `/` is ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key. Empty keys are treated as absent.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into()).filter(|k: &String| !k.is_empty());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::DEFAULT_API_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
        }
    }
}

// ORDERS CLIENT
/// HTTP client for the orders backend.
pub struct OrdersClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OrdersClient {
    /// Creates a new client from the build-time configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::from_env())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the aggregate order summary.
    pub async fn fetch_summary(&self) -> Result<Summary, AppError> {
        let request = self.http.get(self.config.summary_url());
        self.send(request, "Failed to fetch summary").await
    }

    /// Fetches up to `limit` recent orders.
    pub async fn fetch_orders(&self, limit: u32) -> Result<Vec<Order>, AppError> {
        let request = self.http.get(self.config.orders_url(limit));
        self.send(request, "Failed to fetch orders").await
    }

    /// Submits a new order and returns the stored record.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, AppError> {
        let request = self.http.post(self.config.create_order_url()).json(order);
        self.send(request, "Failed to create order").await
    }

    /// Executes a single request and decodes the JSON body.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        failure: &str,
    ) -> Result<T, AppError> {
        let request = match self.config.api_key() {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        };

        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body, failure));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

/// Extracts the human-readable `detail` from an error body.
///
/// The backend sends either `{"detail": "..."}` or, for rejected input,
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Creates an error based on HTTP status code and the response body.
pub fn error_for_status(status: reqwest::StatusCode, body: &str, failure: &str) -> AppError {
    match (status.as_u16(), error_detail(body)) {
        (401 | 403, Some(detail)) => AppError::AuthError(detail),
        (401 | 403, None) => AppError::AuthError(format!("{failure}: {status}")),
        (404, Some(detail)) => AppError::NotFound(detail),
        (_, Some(detail)) => AppError::Rejected(detail),
        (_, None) => AppError::ApiError(format!("{failure}: {status}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the summary using the build-time configuration.
pub async fn fetch_summary() -> Result<Summary, AppError> {
    OrdersClient::new()?.fetch_summary().await
}

/// Fetches the recent-orders list using the build-time configuration.
pub async fn fetch_recent_orders() -> Result<Vec<Order>, AppError> {
    OrdersClient::new()?
        .fetch_orders(Config::RECENT_ORDERS_LIMIT)
        .await
}

/// Submits an order using the build-time configuration.
pub async fn submit_order(order: &NewOrder) -> Result<Order, AppError> {
    OrdersClient::new()?.create_order(order).await
}
