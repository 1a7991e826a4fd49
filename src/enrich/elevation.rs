//! Point elevation lookups.
//!
//! Queries a USGS Elevation Point Query Service compatible endpoint for the
//! ground elevation at a coordinate. The service answers with a JSON object
//! whose `value` holds the elevation, either as a number or as a string.

use reqwest::blocking::Client;
use reqwest::Url;

use crate::columns;
use crate::error::{Result, VoucherError};
use crate::record::Record;

use super::http::{check_status, read_json, request_error};

/// Service name used in errors and logs.
pub const SERVICE: &str = "elevation";

/// Provenance sentence written to `georeferenceRemarks`.
pub const GEOREFERENCE_REMARK: &str =
    "Elevation value calculated using USGS Bulk Point Query Service (V 2.0)";

/// Value the service returns for coordinates outside its coverage.
pub const NO_DATA_SENTINEL: f64 = -1_000_000.0;

/// Client for the point elevation service.
#[derive(Debug, Clone)]
pub struct ElevationClient {
    client: Client,
    url: String,
}

impl ElevationClient {
    /// Create a client for the endpoint at `url`.
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The configured endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the query URL for a coordinate.
    pub fn request_url(&self, longitude: &str, latitude: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.url,
            &[
                ("output", "json"),
                ("x", longitude),
                ("y", latitude),
                ("units", "Meters"),
            ],
        )
        .map_err(|e| VoucherError::enrichment(SERVICE, format!("invalid URL {}: {}", self.url, e)))
    }

    /// Look up the elevation in meters at a coordinate.
    ///
    /// Returns `Ok(None)` when the service has no data for the point.
    pub fn lookup(&self, longitude: &str, latitude: &str) -> Result<Option<String>> {
        let url = self.request_url(longitude, latitude)?;
        tracing::debug!("Querying elevation at x={} y={}", longitude, latitude);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| request_error(SERVICE, e))?;
        let body = read_json(SERVICE, check_status(SERVICE, response)?)?;

        parse_elevation(&body)
    }

    /// Enrich `record` with its elevation and provenance remark.
    ///
    /// Records missing either coordinate are left alone and no request is
    /// made.
    pub fn apply(&self, record: &mut Record) -> Result<()> {
        let longitude = record.get(columns::DECIMAL_LONGITUDE).trim().to_string();
        let latitude = record.get(columns::DECIMAL_LATITUDE).trim().to_string();
        if longitude.is_empty() || latitude.is_empty() {
            return Ok(());
        }

        match self.lookup(&longitude, &latitude)? {
            Some(meters) => {
                record.set(columns::MINIMUM_ELEVATION, meters);
                record.set(columns::GEOREFERENCE_REMARKS, GEOREFERENCE_REMARK);
            }
            None => {
                tracing::warn!(
                    "No elevation data at x={} y={}; leaving elevation empty",
                    longitude,
                    latitude
                );
            }
        }
        Ok(())
    }
}

/// Extract the elevation from a service response body.
///
/// # Errors
///
/// Returns an enrichment error when `value` is missing or not numeric.
pub fn parse_elevation(body: &serde_json::Value) -> Result<Option<String>> {
    let raw = match body.get("value") {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(VoucherError::enrichment(
                SERVICE,
                format!("unexpected elevation value {}", other),
            ))
        }
        None => {
            return Err(VoucherError::enrichment(
                SERVICE,
                "response has no `value` field",
            ))
        }
    };

    let meters = plain_number(&raw).ok_or_else(|| {
        VoucherError::enrichment(SERVICE, format!("elevation {:?} is not a number", raw))
    })?;

    match meters.parse::<f64>() {
        Ok(v) if v <= NO_DATA_SENTINEL => Ok(None),
        Ok(_) => Ok(Some(meters.to_string())),
        Err(_) => Err(VoucherError::enrichment(
            SERVICE,
            format!("elevation {:?} is not a number", raw),
        )),
    }
}

/// Strip quoting, whitespace and a trailing unit suffix from a number.
///
/// `"\"1615.84\""`, `"1615.84 Meters"` and `"1615.84m"` all give
/// `"1615.84"`.
pub fn plain_number(raw: &str) -> Option<&str> {
    let trimmed = raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    let number = trimmed
        .split_whitespace()
        .next()?
        .trim_end_matches(|c: char| c.is_alphabetic());
    if number.is_empty() {
        None
    } else {
        Some(number)
    }
}
