//! Loader for data catalog documents (YAML/TOML/JSON formats).
//!
//! A catalog document lists domains, collections, contracts and products.
//! This crate parses such documents into the strongly-typed
//! [`Catalog`](catalog_core::Catalog) structure.
//!
//! # Example
//!
//! ```rust
//! use catalog_parser::parse_yaml;
//!
//! let yaml = r#"
//! contracts:
//!   - id: c-orders
//!     fundamentals:
//!       name: orders
//!       version: "1.0.0"
//!       owner: sales-data
//!       domain: sales
//!       collectionId: col-orders
//!     tags:
//!       layer: Bronze
//!     schema:
//!       tableName: raw.orders
//! products:
//!   - id: p-1
//!     name: orders_ingest
//!     dataContractId: c-orders
//!     technology: Airbyte
//!     pipelineType: ingestion
//! "#;
//!
//! let catalog = parse_yaml(yaml).expect("Failed to parse catalog");
//! assert_eq!(catalog.contracts.len(), 1);
//! assert_eq!(catalog.products[0].name, "orders_ingest");
//! ```

mod config;

pub use config::*;

use catalog_core::{Catalog, CatalogError};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The document parsed but the catalog is inconsistent
    #[error("Catalog has {} integrity error(s): {}", .0.len(), join_errors(.0))]
    Integrity(Vec<CatalogError>),
}

fn join_errors(errors: &[CatalogError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported catalog document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a catalog from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml_ng::from_str(content)?;
    Ok(catalog)
}

/// Parse a catalog from a TOML string.
///
/// # Example
///
/// ```rust
/// use catalog_parser::parse_toml;
///
/// let toml = r#"
/// [[domains]]
/// id = "d-sales"
/// name = "Sales"
/// "#;
///
/// let catalog = parse_toml(toml).unwrap();
/// assert_eq!(catalog.domains[0].name, "Sales");
/// ```
pub fn parse_toml(content: &str) -> Result<Catalog> {
    let catalog: Catalog =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string, as served by the catalog API.
pub fn parse_json(content: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(content)?;
    Ok(catalog)
}

/// Detect the catalog format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `CatalogFormat::Yaml`
/// * `.toml` → `CatalogFormat::Toml`
/// * `.json` → `CatalogFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<CatalogFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(CatalogFormat::Yaml),
        "toml" => Ok(CatalogFormat::Toml),
        "json" => Ok(CatalogFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a catalog from a file with automatic format detection.
pub fn parse_file(path: &Path) -> Result<Catalog> {
    load_catalog(path, &LoaderConfig::default())
}

/// Load a catalog from a file, applying the loader options.
///
/// With `strict_layers`, contracts carrying an unrecognized layer are
/// rejected. With `check_references`, every integrity problem found by
/// [`Catalog::check_integrity`] is returned as a single
/// [`ParserError::Integrity`].
///
/// ```no_run
/// use catalog_parser::{load_catalog, LoaderConfig};
/// use std::path::Path;
///
/// let config = LoaderConfig::builder().strict_layers(true).build();
/// let catalog = load_catalog(Path::new("catalog.yml"), &config).unwrap();
/// println!("Loaded {} contracts", catalog.contracts.len());
/// ```
pub fn load_catalog(path: &Path, config: &LoaderConfig) -> Result<Catalog> {
    let format = match config.format {
        Some(format) => format,
        None => detect_format(path)?,
    };
    info!("Loading catalog from {} as {:?}", path.display(), format);

    let content = std::fs::read_to_string(path)?;
    let catalog = parse_str(&content, format, config)?;

    info!(
        "Loaded {} domain(s), {} collection(s), {} contract(s), {} product(s)",
        catalog.domains.len(),
        catalog.collections.len(),
        catalog.contracts.len(),
        catalog.products.len()
    );
    Ok(catalog)
}

/// Parse catalog content of a known format, applying the loader options.
pub fn parse_str(content: &str, format: CatalogFormat, config: &LoaderConfig) -> Result<Catalog> {
    let catalog = match format {
        CatalogFormat::Yaml => parse_yaml(content)?,
        CatalogFormat::Toml => parse_toml(content)?,
        CatalogFormat::Json => parse_json(content)?,
    };

    let unrecognized: Vec<CatalogError> = catalog
        .contracts
        .iter()
        .filter(|c| !c.tags.layer.is_recognized())
        .map(|c| {
            warn!(
                "Contract '{}' has unrecognized layer '{}'",
                c.id, c.tags.layer
            );
            CatalogError::ContractLayer {
                contract: c.id.clone(),
                layer: c.tags.layer.to_string(),
            }
        })
        .collect();

    if config.strict_layers && !unrecognized.is_empty() {
        return Err(ParserError::Integrity(unrecognized));
    }

    if config.check_references {
        let errors = catalog.check_integrity();
        debug!("Integrity check found {} problem(s)", errors.len());
        if !errors.is_empty() {
            return Err(ParserError::Integrity(errors));
        }
    }

    Ok(catalog)
}
