//! Findings produced by the rule engine.
//!
//! Errors and warnings are typed here and rendered to strings when they are
//! stored in a [`ValidationResult`](catalog_core::ValidationResult).

use catalog_core::{Layer, PipelineType};
use thiserror::Error;

/// Hard rule violations. Any of these makes a contract invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product runs a pipeline type the contract's layer does not allow
    #[error("Product '{product}' uses disallowed pipeline type '{pipeline_type}' for layer '{layer}'")]
    DisallowedPipelineType {
        product: String,
        pipeline_type: PipelineType,
        layer: Layer,
    },

    /// Several products of one contract share a technology
    #[error(
        "Technology '{technology}' is used by multiple products: {}",
        quote_all(.products)
    )]
    DuplicateTechnology {
        technology: String,
        products: Vec<String>,
    },
}

/// Advisory findings. These never affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    /// Product does not declare a technology
    #[error("Product '{0}' has no technology specified")]
    MissingTechnology(String),

    /// No product references the contract
    #[error("Contract has no associated products")]
    NoProducts,
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Creates a new disallowed pipeline type error.
    pub fn disallowed(product: impl Into<String>, pipeline_type: PipelineType, layer: &Layer) -> Self {
        Self::DisallowedPipelineType {
            product: product.into(),
            pipeline_type,
            layer: layer.clone(),
        }
    }

    /// Creates a new duplicate technology error.
    pub fn duplicate_technology(technology: impl Into<String>, products: Vec<String>) -> Self {
        Self::DuplicateTechnology {
            technology: technology.into(),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::disallowed("orders_clean", PipelineType::Processing, &Layer::Bronze)
                .to_string(),
            "Product 'orders_clean' uses disallowed pipeline type 'processing' for layer 'Bronze'"
        );
        assert_eq!(
            ValidationError::duplicate_technology(
                "Spark",
                vec!["a".to_string(), "b".to_string()]
            )
            .to_string(),
            "Technology 'Spark' is used by multiple products: 'a', 'b'"
        );
        assert_eq!(
            ValidationWarning::MissingTechnology("x".to_string()).to_string(),
            "Product 'x' has no technology specified"
        );
        assert_eq!(
            ValidationWarning::NoProducts.to_string(),
            "Contract has no associated products"
        );
    }
}
