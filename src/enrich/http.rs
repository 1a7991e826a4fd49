//! Shared HTTP plumbing for the enrichment services.

use reqwest::blocking::{Client, Response};
use std::time::Duration;

use crate::error::{Result, VoucherError};

/// User agent sent to every service.
pub const USER_AGENT: &str = concat!("voucherkit/", env!("CARGO_PKG_VERSION"));

/// Build a blocking client with the given request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| VoucherError::Other(anyhow::anyhow!("Failed to build HTTP client: {}", e)))
}

/// Turn a transport error into an enrichment error for `service`.
pub fn request_error(service: &str, err: reqwest::Error) -> VoucherError {
    if err.is_timeout() {
        VoucherError::enrichment(service, "request timed out")
    } else {
        VoucherError::enrichment(service, err.to_string())
    }
}

/// Reject non-success responses, naming the status.
pub fn check_status(service: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(VoucherError::enrichment(
            service,
            format!("HTTP {} from {}", status, response.url()),
        ))
    }
}

/// Read a response body as JSON.
pub fn read_json(service: &str, response: Response) -> Result<serde_json::Value> {
    let body = response.text().map_err(|e| request_error(service, e))?;
    serde_json::from_str(&body)
        .map_err(|e| VoucherError::enrichment(service, format!("malformed JSON response: {}", e)))
}
