//! Error types for the catalog data model.
//!
//! These errors describe problems with the catalog itself (unknown enum
//! values, broken references, duplicate identifiers). They are distinct from
//! validation findings, which are reported as messages in a
//! [`ValidationResult`](crate::ValidationResult).

use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Layer is not one of Bronze, Silver, Gold or Model
    #[error("Unrecognized layer: '{0}'")]
    UnrecognizedLayer(String),

    /// A contract in the catalog carries an unrecognized layer
    #[error("Contract '{contract}' has unrecognized layer '{layer}'")]
    ContractLayer {
        /// Contract id
        contract: String,
        /// Raw layer value
        layer: String,
    },

    /// Pipeline type name is not known
    #[error("Unknown pipeline type: '{0}'")]
    UnknownPipelineType(String),

    /// Two entities of the same kind share an identifier
    #[error("Duplicate {kind} id: '{id}'")]
    DuplicateId {
        /// Entity kind (e.g. "contract", "product")
        kind: &'static str,
        /// Repeated identifier
        id: String,
    },

    /// An entity points at an identifier that does not exist
    #[error("{kind} '{id}' references unknown {target} '{target_id}'")]
    DanglingReference {
        /// Kind of the referencing entity
        kind: &'static str,
        /// Id of the referencing entity
        id: String,
        /// Kind of the referenced entity
        target: &'static str,
        /// Missing identifier
        target_id: String,
    },

    /// Contract version is not MAJOR.MINOR[.PATCH]
    #[error("Invalid version '{version}' for contract '{contract}'")]
    InvalidVersion {
        /// Contract id
        contract: String,
        /// Offending version string
        version: String,
    },

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),
}
