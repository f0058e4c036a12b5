//! Validation traits and types for data contracts.
//!
//! This module defines the trait implemented by contract validators and the
//! result type they produce. Implementations live in `catalog_validator`.

use crate::{DataContract, DataProduct};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation results keyed by contract id.
pub type CollectionResults = BTreeMap<String, ValidationResult>;

/// Core trait for validating data contracts against their products.
///
/// Validators are pure: the same inputs always give the same result, and
/// implementations hold no mutable state, so one instance can be shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use catalog_core::{ContractValidator, DataContract, DataProduct, ValidationResult};
///
/// struct AcceptAll;
///
/// impl ContractValidator for AcceptAll {
///     fn validate(&self, _contract: &DataContract, _products: &[DataProduct]) -> ValidationResult {
///         ValidationResult::success()
///     }
/// }
/// ```
pub trait ContractValidator: Send + Sync {
    /// Validates one contract.
    ///
    /// # Arguments
    ///
    /// * `contract` - The contract to validate
    /// * `products` - Every known product; implementations select the ones
    ///   that reference `contract`
    fn validate(&self, contract: &DataContract, products: &[DataProduct]) -> ValidationResult;

    /// Validates every contract against the full product list.
    ///
    /// Returns exactly one entry per distinct contract id, including
    /// contracts without products. If ids repeat, the last contract wins.
    fn validate_collection(
        &self,
        contracts: &[DataContract],
        products: &[DataProduct],
    ) -> CollectionResults {
        contracts
            .iter()
            .map(|contract| (contract.id.clone(), self.validate(contract, products)))
            .collect()
    }
}

/// Outcome of validating one contract.
///
/// Errors are hard rule violations and make the result invalid; warnings
/// are advisory and never affect `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no errors were recorded
    pub is_valid: bool,

    /// Rule violations, in detection order
    pub errors: Vec<String>,

    /// Advisory findings, in detection order
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result with no findings.
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a result from collected findings.
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Adds an error and marks the result invalid.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
