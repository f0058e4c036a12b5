//! Technology rules for products sharing a contract.
//!
//! When a contract has several products, each must run on a different
//! technology. Products without a technology are reported as warnings and
//! take no part in the uniqueness check.

use crate::{ValidationError, ValidationWarning};
use catalog_core::DataProduct;

/// Checks technology uniqueness and presence across a contract's products.
#[derive(Debug, Default, Clone, Copy)]
pub struct TechnologyValidator;

impl TechnologyValidator {
    /// Creates a new technology validator.
    pub fn new() -> Self {
        Self
    }

    /// Returns one error per technology shared by two or more products.
    ///
    /// Technologies are reported in order of first appearance, and each
    /// error names its products in input order. A single product never
    /// produces an error.
    pub fn validate_uniqueness(&self, products: &[&DataProduct]) -> Vec<ValidationError> {
        if products.len() < 2 {
            return Vec::new();
        }

        let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
        for product in products {
            let Some(technology) = product.technology() else {
                continue;
            };
            match groups.iter_mut().find(|(t, _)| *t == technology) {
                Some((_, names)) => names.push(product.name.clone()),
                None => groups.push((technology, vec![product.name.clone()])),
            }
        }

        groups
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(technology, names)| ValidationError::duplicate_technology(technology, names))
            .collect()
    }

    /// Returns one warning per product without a technology, in input order.
    pub fn missing_technology(&self, products: &[&DataProduct]) -> Vec<ValidationWarning> {
        products
            .iter()
            .filter(|p| p.technology().is_none())
            .map(|p| ValidationWarning::MissingTechnology(p.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{DataProductBuilder, PipelineType};
    use pretty_assertions::assert_eq;

    fn product(name: &str, technology: Option<&str>) -> DataProduct {
        let builder = DataProductBuilder::new(name, name, "c", PipelineType::Processing);
        match technology {
            Some(t) => builder.technology(t).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn test_single_product_is_never_duplicate() {
        let only = product("a", Some("Spark"));
        assert!(TechnologyValidator::new().validate_uniqueness(&[&only]).is_empty());
    }

    #[test]
    fn test_distinct_technologies_pass() {
        let a = product("a", Some("Spark"));
        let b = product("b", Some("dbt"));
        assert!(TechnologyValidator::new().validate_uniqueness(&[&a, &b]).is_empty());
    }

    #[test]
    fn test_groups_duplicates_by_first_appearance() {
        let a = product("a", Some("dbt"));
        let b = product("b", Some("Spark"));
        let c = product("c", Some("dbt"));
        let d = product("d", Some("Spark"));
        let e = product("e", Some("dbt"));

        let errors = TechnologyValidator::new().validate_uniqueness(&[&a, &b, &c, &d, &e]);
        assert_eq!(
            errors,
            vec![
                ValidationError::duplicate_technology(
                    "dbt",
                    vec!["a".to_string(), "c".to_string(), "e".to_string()]
                ),
                ValidationError::duplicate_technology(
                    "Spark",
                    vec!["b".to_string(), "d".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_missing_technologies_are_not_duplicates() {
        let a = product("a", None);
        let b = product("b", Some(""));
        let validator = TechnologyValidator::new();

        assert!(validator.validate_uniqueness(&[&a, &b]).is_empty());
        assert_eq!(
            validator.missing_technology(&[&a, &b]),
            vec![
                ValidationWarning::MissingTechnology("a".to_string()),
                ValidationWarning::MissingTechnology("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_technology_comparison_is_exact() {
        let a = product("a", Some("Spark"));
        let b = product("b", Some("spark"));
        assert!(TechnologyValidator::new().validate_uniqueness(&[&a, &b]).is_empty());
    }
}
