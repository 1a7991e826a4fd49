//! Scientific name verification.
//!
//! Posts a name to a GNverifier compatible service and keeps the best
//! match it reports. Only the first name entry and its `bestResult` are
//! read.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::columns;
use crate::config::NamesSettings;
use crate::error::{Result, VoucherError};
use crate::record::Record;

use super::http::{check_status, read_json, request_error};

/// Service name used in errors and logs.
pub const SERVICE: &str = "name verification";

/// Match type reported when nothing matched.
pub const NO_MATCH: &str = "NoMatch";

/// Request body sent to the verification service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest<'a> {
    pub name_strings: Vec<&'a str>,
    pub data_sources: &'a [u32],
    pub with_all_matches: bool,
    pub with_capitalization: bool,
    pub with_uninomial_fuzzy_match: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VerificationResponse {
    names: Vec<NameResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct NameResult {
    match_type: Option<String>,
    best_result: Option<MatchResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MatchResult {
    match_type: Option<String>,
    matched_canonical_full: Option<String>,
    is_synonym: Option<bool>,
    taxonomic_status: Option<String>,
    data_source_title_short: Option<String>,
}

/// The best match reported for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub match_type: String,
    pub matched_canonical_full: String,
    pub is_synonym: bool,
    pub data_source_title_short: String,
}

impl NameMatch {
    /// Write the match into the four GNV columns of `record`.
    pub fn write_to(&self, record: &mut Record) {
        record.set(columns::GNV_MATCH_TYPE, self.match_type.as_str());
        record.set(
            columns::GNV_MATCHED_CANONICAL,
            self.matched_canonical_full.as_str(),
        );
        record.set(columns::GNV_IS_SYNONYM, self.is_synonym.to_string());
        record.set(
            columns::GNV_DATA_SOURCE,
            self.data_source_title_short.as_str(),
        );
    }
}

/// Client for the name verification service.
#[derive(Debug, Clone)]
pub struct NameVerifier {
    client: Client,
    settings: NamesSettings,
}

impl NameVerifier {
    /// Create a verifier using `settings` for endpoint and matching flags.
    pub fn new(client: Client, settings: NamesSettings) -> Self {
        Self { client, settings }
    }

    /// The configured endpoint.
    pub fn url(&self) -> &str {
        &self.settings.url
    }

    /// Build the request body for one name.
    pub fn request_for<'a>(&'a self, name: &'a str) -> VerificationRequest<'a> {
        VerificationRequest {
            name_strings: vec![name],
            data_sources: &self.settings.data_sources,
            with_all_matches: false,
            with_capitalization: self.settings.capitalize,
            with_uninomial_fuzzy_match: self.settings.fuzzy_uninomial,
        }
    }

    /// Verify one name, returning its best match if any.
    pub fn verify(&self, name: &str) -> Result<Option<NameMatch>> {
        tracing::debug!("Verifying name {:?}", name);

        let response = self
            .client
            .post(&self.settings.url)
            .json(&self.request_for(name))
            .send()
            .map_err(|e| request_error(SERVICE, e))?;
        let body = read_json(SERVICE, check_status(SERVICE, response)?)?;

        parse_best_match(body)
    }

    /// Enrich `record` with the verification of its `scientificName`.
    ///
    /// Records without a name are left alone and no request is made.
    pub fn apply(&self, record: &mut Record) -> Result<()> {
        let name = record.get(columns::SCIENTIFIC_NAME).trim().to_string();
        if name.is_empty() {
            return Ok(());
        }

        match self.verify(&name)? {
            Some(found) => found.write_to(record),
            None => tracing::debug!("No match for {:?}", name),
        }
        Ok(())
    }
}

/// Extract the best match from a verification response body.
///
/// Returns `Ok(None)` when the first name has no best result or its match
/// type is `NoMatch`.
pub fn parse_best_match(body: serde_json::Value) -> Result<Option<NameMatch>> {
    let response: VerificationResponse = serde_json::from_value(body).map_err(|e| {
        VoucherError::enrichment(SERVICE, format!("unexpected response shape: {}", e))
    })?;

    let Some(name) = response.names.into_iter().next() else {
        return Ok(None);
    };
    let Some(best) = name.best_result else {
        return Ok(None);
    };

    let match_type = best.match_type.or(name.match_type).unwrap_or_default();
    if match_type.is_empty() || match_type == NO_MATCH {
        return Ok(None);
    }

    let is_synonym = best.is_synonym.unwrap_or_else(|| {
        best.taxonomic_status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("synonym"))
    });

    Ok(Some(NameMatch {
        match_type,
        matched_canonical_full: best.matched_canonical_full.unwrap_or_default(),
        is_synonym,
        data_source_title_short: best.data_source_title_short.unwrap_or_default(),
    }))
}
