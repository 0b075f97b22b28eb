//! Legacy Alertmanager HTTP Client
//!
//! Implements the `RemoteAlertmanager` port against the external engine's
//! v1 HTTP API. The client is stateless: one request per operation, a fixed
//! timeout on every request and no retries.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `get_alerts` | GET | `/v1/alerts?<raw query>` |
//! | `post_alerts` | POST | `/v1/alerts` |
//! | `test_receiver` | POST | `/v1/testReceiver` |
//! | `create_route` | POST | `/v1/routes` |
//! | `update_route` | PUT | `/v1/routes` |
//! | `delete_route` | DELETE | `/v1/routes` (body `{"name": ...}`) |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::json;
use tracing::debug;

use alertbridge_domain::constants::{ALERTS_PATH, ROUTES_PATH, TEST_RECEIVER_PATH};
use alertbridge_domain::entities::{
    GettableAlert, GettableAlertsParams, LegacyPostableAlert, Receiver,
};
use alertbridge_domain::error::{Error, Result};
use alertbridge_domain::ports::RemoteAlertmanager;

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, LEGACY_ALERTMANAGER_PROVIDER,
};
use crate::http::HttpClientConfig;
use crate::utils::HttpResponseUtils;

/// HTTP client for the legacy Alertmanager API
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use alertbridge_providers::alertmanager::HttpLegacyAlertmanager;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let remote = HttpLegacyAlertmanager::new(
///         "http://localhost:9093/api/".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct HttpLegacyAlertmanager {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpLegacyAlertmanager {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root of the engine (e.g. "http://localhost:9093/api/")
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            timeout,
            http_client,
        }
    }

    /// Create a client with its own pooled HTTP client
    pub fn from_config(base_url: String, config: &HttpClientConfig) -> Result<Self> {
        Ok(Self::new(base_url, config.timeout, config.build_client()?))
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Start a request with the JSON content type and timeout applied
    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .timeout(self.timeout)
    }

    /// Send a request, mapping transport failures to network errors
    async fn dispatch(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network_with_source(
                    format!("{} {:?} ({path})", ERROR_MSG_REQUEST_TIMEOUT, self.timeout),
                    e,
                )
            } else {
                Error::network_with_source(format!("HTTP request to {path} failed"), e)
            }
        })
    }

    /// Send a request and fail on transport errors or non-2xx statuses
    async fn send(&self, request: RequestBuilder, path: &str) -> Result<()> {
        let response = self.dispatch(request, path).await?;
        HttpResponseUtils::ensure_success(response, path)?;
        Ok(())
    }
}

#[async_trait]
impl RemoteAlertmanager for HttpLegacyAlertmanager {
    async fn get_alerts(&self, params: &GettableAlertsParams) -> Result<Vec<GettableAlert>> {
        let mut url = self.endpoint(ALERTS_PATH);
        if !params.raw_query.is_empty() {
            url.push('?');
            url.push_str(&params.raw_query);
        }

        let response = self
            .dispatch(self.request(Method::GET, url), ALERTS_PATH)
            .await?;
        let body = HttpResponseUtils::check_and_parse(response, ALERTS_PATH).await?;
        let data = HttpResponseUtils::unwrap_data_envelope(body, ALERTS_PATH)?;
        Ok(serde_json::from_value(data)?)
    }

    async fn post_alerts(&self, alerts: &[LegacyPostableAlert]) -> Result<()> {
        debug!("Posting {} alerts to {}", alerts.len(), ALERTS_PATH);
        let request = self
            .request(Method::POST, self.endpoint(ALERTS_PATH))
            .json(alerts);
        self.send(request, ALERTS_PATH).await
    }

    async fn test_receiver(&self, receiver: &Receiver) -> Result<()> {
        let request = self
            .request(Method::POST, self.endpoint(TEST_RECEIVER_PATH))
            .json(receiver);
        self.send(request, TEST_RECEIVER_PATH).await
    }

    async fn create_route(&self, receiver: &Receiver) -> Result<()> {
        let request = self
            .request(Method::POST, self.endpoint(ROUTES_PATH))
            .json(receiver);
        self.send(request, ROUTES_PATH).await
    }

    async fn update_route(&self, receiver: &Receiver) -> Result<()> {
        let request = self
            .request(Method::PUT, self.endpoint(ROUTES_PATH))
            .json(receiver);
        self.send(request, ROUTES_PATH).await
    }

    async fn delete_route(&self, receiver_name: &str) -> Result<()> {
        let request = self
            .request(Method::DELETE, self.endpoint(ROUTES_PATH))
            .json(&json!({ "name": receiver_name }));
        self.send(request, ROUTES_PATH).await
    }

    fn provider_name(&self) -> &str {
        LEGACY_ALERTMANAGER_PROVIDER
    }
}
