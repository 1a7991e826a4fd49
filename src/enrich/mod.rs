//! Web enrichment of voucher records.
//!
//! Two lookups run for each record before the field derivations:
//!
//! - [`elevation`] - ground elevation at the record's coordinates
//! - [`names`] - verification of the record's scientific name
//!
//! Each lookup returns its result by value and writes it only into the
//! record being processed. How a failed lookup is handled is decided by
//! the [`FailurePolicy`].

pub mod elevation;
pub mod http;
pub mod names;

pub use elevation::ElevationClient;
pub use names::{NameMatch, NameVerifier};

use crate::columns;
use crate::config::{FailurePolicy, VoucherConfig};
use crate::error::{Result, VoucherError};
use crate::record::Record;

/// Runs both web lookups for one record at a time.
#[derive(Debug, Clone)]
pub struct Enricher {
    elevation: ElevationClient,
    names: NameVerifier,
    policy: FailurePolicy,
}

impl Enricher {
    /// Create an enricher from its two clients.
    pub fn new(elevation: ElevationClient, names: NameVerifier, policy: FailurePolicy) -> Self {
        Self {
            elevation,
            names,
            policy,
        }
    }

    /// Create an enricher from configuration, sharing one HTTP client.
    pub fn from_config(config: &VoucherConfig) -> Result<Self> {
        let client = http::build_client(config.timeout())?;
        Ok(Self::new(
            ElevationClient::new(client.clone(), config.elevation.url.clone()),
            NameVerifier::new(client, config.names.clone()),
            config.on_lookup_failure,
        ))
    }

    /// The configured failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run both lookups for `record`.
    ///
    /// All enrichment columns are set (empty when no value was found), so
    /// the record always carries the full enriched column set. Under
    /// [`FailurePolicy::Continue`] the failed lookups are returned; under
    /// [`FailurePolicy::FailFast`] the first failure is returned as an error.
    pub fn enrich(&self, record: &mut Record) -> Result<Vec<VoucherError>> {
        for column in columns::ENRICHMENT_COLUMNS {
            record.set(*column, "");
        }

        let mut failures = Vec::new();
        if let Err(err) = self.elevation.apply(record) {
            self.handle(err, &mut failures)?;
        }
        if let Err(err) = self.names.apply(record) {
            self.handle(err, &mut failures)?;
        }
        Ok(failures)
    }

    fn handle(&self, err: VoucherError, failures: &mut Vec<VoucherError>) -> Result<()> {
        match self.policy {
            FailurePolicy::FailFast => Err(err),
            FailurePolicy::Continue => {
                failures.push(err);
                Ok(())
            }
        }
    }
}
