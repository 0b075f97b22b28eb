//! HTTP Response Utilities
//!
//! Helper functions for processing responses from the remote engine.
//! These are shared utilities, not ports.

use crate::constants::ALERTS_DATA_FIELD;
use alertbridge_domain::error::{Error, Result};
use reqwest::Response;
use serde_json::Value;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Fail on any status outside the 2xx class
    ///
    /// The error carries the status line only; the body is not inspected.
    pub fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote_status(endpoint, status.to_string()));
        }
        Ok(response)
    }

    /// Check response status and parse JSON
    pub async fn check_and_parse(response: Response, endpoint: &str) -> Result<Value> {
        Self::ensure_success(response, endpoint)?
            .json()
            .await
            .map_err(|e| {
                Error::network_with_source(format!("Failed to parse response from {endpoint}"), e)
            })
    }

    /// Extract the alert list from a listing envelope
    ///
    /// A missing `data` field is an error; `null` is an empty list.
    pub fn unwrap_data_envelope(mut body: Value, endpoint: &str) -> Result<Value> {
        match body.get_mut(ALERTS_DATA_FIELD).map(Value::take) {
            Some(Value::Null) => Ok(Value::Array(Vec::new())),
            Some(data) => Ok(data),
            None => Err(Error::internal(format!(
                "Response from {endpoint} has no '{ALERTS_DATA_FIELD}' field"
            ))),
        }
    }
}
