//! # Data Catalog Validator
//!
//! Rule engine for data contracts. Given a contract and the catalog's
//! products, it checks:
//!
//! - Pipeline types: every product must run a pipeline type allowed by the
//!   contract's layer (see [`recommended_pipeline_types`])
//! - Technology uniqueness: products sharing a contract must use distinct
//!   technologies
//! - Advisories: products without a technology, contracts without products
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{DataContractBuilder, DataProductBuilder, Layer, PipelineType};
//! use catalog_validator::validate_collection;
//!
//! let contracts = vec![
//!     DataContractBuilder::new("c-gold", "revenue").layer(Layer::Gold).build(),
//!     DataContractBuilder::new("c-empty", "unused").layer(Layer::Silver).build(),
//! ];
//! let products = vec![
//!     DataProductBuilder::new("p-1", "revenue_spark", "c-gold", PipelineType::Processing)
//!         .technology("Spark")
//!         .build(),
//!     DataProductBuilder::new("p-2", "revenue_dbt", "c-gold", PipelineType::Processing)
//!         .technology("dbt")
//!         .build(),
//! ];
//!
//! let results = validate_collection(&contracts, &products);
//!
//! assert!(results["c-gold"].is_valid);
//! assert_eq!(results["c-empty"].warnings, vec!["Contract has no associated products"]);
//! ```

mod engine;
mod error;
mod pipeline;
mod summary;
mod technology;

pub use engine::*;
pub use error::*;
pub use pipeline::*;
pub use summary::*;
pub use technology::*;
