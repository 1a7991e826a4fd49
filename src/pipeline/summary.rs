//! Run summary reporting.

use crate::error::VoucherError;

/// A lookup that failed for one row under the continue policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based line number in the input table (the header is line 1).
    pub row: usize,
    /// The row's `catalogNumber`, for finding it in the sheet.
    pub catalog_number: String,
    /// Which service failed.
    pub service: String,
    /// What went wrong.
    pub message: String,
}

impl RowFailure {
    /// Describe a failed lookup for a row.
    pub fn new(row: usize, catalog_number: &str, err: &VoucherError) -> Self {
        let (service, message) = match err {
            VoucherError::Enrichment { service, message } => (service.clone(), message.clone()),
            other => ("enrichment".to_string(), other.to_string()),
        };
        Self {
            row,
            catalog_number: catalog_number.to_string(),
            service,
            message,
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows read from the input, including the example row.
    pub rows_read: usize,
    /// Rows written to the output.
    pub rows_written: usize,
    /// Example rows discarded (0 or 1).
    pub example_rows_skipped: usize,
    /// Whether web enrichment ran.
    pub enriched: bool,
    /// Per-row lookup failures.
    pub failures: Vec<RowFailure>,
}

impl RunSummary {
    /// Whether every row was processed without a lookup failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of distinct rows with at least one failure.
    pub fn failed_rows(&self) -> usize {
        let mut rows: Vec<usize> = self.failures.iter().map(|f| f.row).collect();
        rows.dedup();
        rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_failure_from_enrichment_error() {
        let err = VoucherError::enrichment("elevation", "request timed out");
        let failure = RowFailure::new(4, "DBG000017", &err);
        assert_eq!(failure.row, 4);
        assert_eq!(failure.catalog_number, "DBG000017");
        assert_eq!(failure.service, "elevation");
        assert_eq!(failure.message, "request timed out");
    }

    #[test]
    fn row_failure_from_other_error() {
        let err = VoucherError::Other(anyhow::anyhow!("boom"));
        let failure = RowFailure::new(2, "", &err);
        assert_eq!(failure.service, "enrichment");
        assert_eq!(failure.message, "boom");
    }

    #[test]
    fn failed_rows_counts_each_row_once() {
        let err = VoucherError::enrichment("elevation", "x");
        let summary = RunSummary {
            failures: vec![
                RowFailure::new(3, "a", &err),
                RowFailure::new(3, "a", &err),
                RowFailure::new(5, "b", &err),
            ],
            ..RunSummary::default()
        };
        assert!(!summary.is_clean());
        assert_eq!(summary.failed_rows(), 2);
    }

    #[test]
    fn default_summary_is_clean() {
        assert!(RunSummary::default().is_clean());
    }
}
