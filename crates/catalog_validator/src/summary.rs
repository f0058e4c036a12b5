//! Aggregate counts over a collection of validation results.

use catalog_core::CollectionResults;
use serde::Serialize;

/// Totals across the results of [`validate_collection`](crate::validate_collection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CollectionSummary {
    /// Number of contracts validated
    pub contracts: usize,
    /// Contracts without errors
    pub valid: usize,
    /// Contracts with at least one error
    pub invalid: usize,
    /// Errors across all contracts
    pub errors: usize,
    /// Warnings across all contracts
    pub warnings: usize,
}

impl CollectionSummary {
    /// Computes the summary of a result map.
    pub fn from_results(results: &CollectionResults) -> Self {
        results
            .values()
            .fold(Self::default(), |mut summary, result| {
                summary.contracts += 1;
                if result.is_valid {
                    summary.valid += 1;
                } else {
                    summary.invalid += 1;
                }
                summary.errors += result.errors.len();
                summary.warnings += result.warnings.len();
                summary
            })
    }

    /// True when every contract is valid.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}
