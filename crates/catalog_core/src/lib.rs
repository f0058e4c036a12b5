//! # Data Catalog Core
//!
//! Core data structures and types for the data catalog.
//!
//! The catalog is a hierarchy of business domains, collections, data
//! contracts and data products. A data contract declares the schema,
//! ownership and quality expectations of a dataset; a data product is a
//! pipeline or service implementing exactly one contract.
//!
//! ## Key Concepts
//!
//! - **DataContract**: schema, ownership, terms and quality rules of a dataset
//! - **Layer**: maturity tier of the data (Bronze, Silver, Gold, Model)
//! - **DataProduct**: a pipeline implementing a contract, with its pipeline type and technology
//! - **ValidationResult**: errors and warnings produced by a [`ContractValidator`]
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{DataContractBuilder, DataProductBuilder, Layer, PipelineType};
//!
//! let contract = DataContractBuilder::new("c-orders", "orders")
//!     .owner("sales-data")
//!     .layer(Layer::Bronze)
//!     .build();
//!
//! let product = DataProductBuilder::new("p-1", "orders_ingest", &contract.id, PipelineType::Ingestion)
//!     .technology("Airbyte")
//!     .build();
//!
//! assert_eq!(product.data_contract_id, "c-orders");
//! ```

pub mod builder;
pub mod catalog;
pub mod contract;
pub mod error;
pub mod layer;
pub mod validator;

pub use builder::*;
pub use catalog::*;
pub use contract::*;
pub use error::*;
pub use layer::*;
pub use validator::*;
