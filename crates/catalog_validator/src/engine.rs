//! Main validation engine.
//!
//! This module provides the `DataContractValidator` that runs the pipeline
//! type and technology rules for a contract and assembles the result.

use crate::{PipelineTypeValidator, TechnologyValidator, ValidationWarning};
use catalog_core::{
    CollectionResults, ContractValidator, DataContract, DataProduct, ValidationResult,
};

/// Rule engine for data contracts.
///
/// Stateless: results depend only on the contract and products passed in,
/// and repeated calls return identical results.
///
/// # Example
///
/// ```rust
/// use catalog_core::{ContractValidator, DataContractBuilder, DataProductBuilder, Layer, PipelineType};
/// use catalog_validator::DataContractValidator;
///
/// let contract = DataContractBuilder::new("c-raw", "raw_orders")
///     .layer(Layer::Bronze)
///     .build();
/// let products = vec![
///     DataProductBuilder::new("p-1", "orders_clean", "c-raw", PipelineType::Processing)
///         .technology("dbt")
///         .build(),
/// ];
///
/// let result = DataContractValidator::new().validate(&contract, &products);
///
/// assert!(!result.is_valid);
/// for error in &result.errors {
///     println!("Error: {}", error);
/// }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DataContractValidator {
    pipeline_validator: PipelineTypeValidator,
    technology_validator: TechnologyValidator,
}

impl DataContractValidator {
    /// Creates a new contract validator.
    pub fn new() -> Self {
        Self {
            pipeline_validator: PipelineTypeValidator::new(),
            technology_validator: TechnologyValidator::new(),
        }
    }

    /// Validates a contract against the products that reference it.
    ///
    /// # Arguments
    ///
    /// * `contract` - The contract to validate
    /// * `all_products` - Every known product; only those whose
    ///   `data_contract_id` matches `contract.id` are considered
    ///
    /// # Returns
    ///
    /// A `ValidationResult` whose errors list disallowed pipeline types
    /// followed by duplicate technologies, and whose warnings list products
    /// without a technology or the absence of any product.
    pub fn validate_contract(
        &self,
        contract: &DataContract,
        all_products: &[DataProduct],
    ) -> ValidationResult {
        let products: Vec<&DataProduct> = all_products
            .iter()
            .filter(|p| p.data_contract_id == contract.id)
            .collect();

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 1. Pipeline types allowed by the layer
        errors.extend(
            self.pipeline_validator
                .validate(&contract.tags.layer, &products)
                .iter()
                .map(|e| e.to_string()),
        );

        // 2. Technology uniqueness across sibling products
        errors.extend(
            self.technology_validator
                .validate_uniqueness(&products)
                .iter()
                .map(|e| e.to_string()),
        );

        // 3. Advisory findings
        warnings.extend(
            self.technology_validator
                .missing_technology(&products)
                .iter()
                .map(|w| w.to_string()),
        );
        if products.is_empty() {
            warnings.push(ValidationWarning::NoProducts.to_string());
        }

        ValidationResult::from_findings(errors, warnings)
    }
}

impl ContractValidator for DataContractValidator {
    fn validate(&self, contract: &DataContract, products: &[DataProduct]) -> ValidationResult {
        self.validate_contract(contract, products)
    }
}

/// Validates one contract with the default rule set.
pub fn validate_data_contract(
    contract: &DataContract,
    all_products: &[DataProduct],
) -> ValidationResult {
    DataContractValidator::new().validate_contract(contract, all_products)
}

/// Validates every contract with the default rule set.
///
/// Each contract is checked against the full product list; the map holds
/// one entry per contract id, including contracts with no products.
pub fn validate_collection(
    contracts: &[DataContract],
    products: &[DataProduct],
) -> CollectionResults {
    DataContractValidator::new().validate_collection(contracts, products)
}
