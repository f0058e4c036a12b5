//! Classification enums shared across the catalog.
//!
//! A contract is tagged with a [`Layer`] (its data maturity tier) and a
//! [`ContractStatus`]; a product declares the [`PipelineType`] of the job it runs.

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maturity tier of the data described by a contract.
///
/// Catalog documents carry the layer as a free string. Values outside the
/// four known tiers are kept verbatim in [`Layer::Unrecognized`] so that
/// downstream rules have to handle them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layer {
    /// Raw, ingested data
    Bronze,
    /// Cleaned and conformed data
    Silver,
    /// Business-level aggregates
    Gold,
    /// Data produced by or for ML model training
    Model,
    /// Any value that is not one of the known tiers
    Unrecognized(String),
}

impl Layer {
    /// The four known layers, in maturity order.
    pub const KNOWN: [Layer; 4] = [Layer::Bronze, Layer::Silver, Layer::Gold, Layer::Model];

    /// Parses a layer name, case-insensitively.
    ///
    /// Never fails: unknown names become [`Layer::Unrecognized`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "bronze" => Layer::Bronze,
            "silver" => Layer::Silver,
            "gold" => Layer::Gold,
            "model" => Layer::Model,
            _ => Layer::Unrecognized(value.to_string()),
        }
    }

    /// Parses a layer name and rejects anything outside the known tiers.
    pub fn parse_strict(value: &str) -> Result<Self, CatalogError> {
        match Self::parse(value) {
            Layer::Unrecognized(raw) => Err(CatalogError::UnrecognizedLayer(raw)),
            layer => Ok(layer),
        }
    }

    /// Returns true for the four known tiers.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Layer::Unrecognized(_))
    }

    /// Canonical display name (e.g. `"Bronze"`), or the raw value when unrecognized.
    pub fn as_str(&self) -> &str {
        match self {
            Layer::Bronze => "Bronze",
            Layer::Silver => "Silver",
            Layer::Gold => "Gold",
            Layer::Model => "Model",
            Layer::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Layer {
    fn from(value: String) -> Self {
        Layer::parse(&value)
    }
}

impl From<Layer> for String {
    fn from(layer: Layer) -> Self {
        match layer {
            Layer::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of job a data product runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineType {
    /// Loads raw data from a source system
    Ingestion,
    /// Transforms data between layers
    Processing,
    /// Runs a trained model against data
    ModelInference,
    /// Trains a model
    ModelTraining,
    /// Exposes a model behind a serving endpoint
    ModelServing,
}

impl PipelineType {
    /// Every pipeline type, in declaration order.
    pub const ALL: [PipelineType; 5] = [
        PipelineType::Ingestion,
        PipelineType::Processing,
        PipelineType::ModelInference,
        PipelineType::ModelTraining,
        PipelineType::ModelServing,
    ];

    /// Wire name, as written in catalog documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineType::Ingestion => "ingestion",
            PipelineType::Processing => "processing",
            PipelineType::ModelInference => "model_inference",
            PipelineType::ModelTraining => "model_training",
            PipelineType::ModelServing => "model_serving",
        }
    }
}

impl fmt::Display for PipelineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipelineType::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| CatalogError::UnknownPipelineType(s.to_string()))
    }
}

/// Publication status of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Live and consumable
    Published,
    /// Work in progress
    #[default]
    Draft,
    /// Retired
    Archived,
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractStatus::Published => "published",
            ContractStatus::Draft => "draft",
            ContractStatus::Archived => "archived",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layer_parse_is_case_insensitive() {
        assert_eq!(Layer::parse("Bronze"), Layer::Bronze);
        assert_eq!(Layer::parse("gold"), Layer::Gold);
        assert_eq!(Layer::parse(" MODEL "), Layer::Model);
    }

    #[test]
    fn test_layer_unrecognized_keeps_raw_value() {
        let layer = Layer::parse("Platinum");
        assert_eq!(layer, Layer::Unrecognized("Platinum".to_string()));
        assert!(!layer.is_recognized());
        assert_eq!(layer.to_string(), "Platinum");
    }

    #[test]
    fn test_layer_parse_strict_rejects_unknown() {
        assert!(Layer::parse_strict("Silver").is_ok());
        let err = Layer::parse_strict("Platinum").unwrap_err();
        assert!(matches!(err, CatalogError::UnrecognizedLayer(ref raw) if raw == "Platinum"));
    }

    #[test]
    fn test_layer_serde_roundtrip_uses_canonical_names() {
        let layer: Layer = serde_json::from_str("\"silver\"").unwrap();
        assert_eq!(layer, Layer::Silver);
        assert_eq!(serde_json::to_string(&layer).unwrap(), "\"Silver\"");

        let odd: Layer = serde_json::from_str("\"Diamond\"").unwrap();
        assert_eq!(serde_json::to_string(&odd).unwrap(), "\"Diamond\"");
    }

    #[test]
    fn test_pipeline_type_wire_names() {
        let parsed: PipelineType = serde_json::from_str("\"model_inference\"").unwrap();
        assert_eq!(parsed, PipelineType::ModelInference);
        assert_eq!(PipelineType::ModelServing.to_string(), "model_serving");
        assert_eq!(
            "model_training".parse::<PipelineType>().unwrap(),
            PipelineType::ModelTraining
        );
        assert!("streaming".parse::<PipelineType>().is_err());
    }

    #[test]
    fn test_contract_status_default_is_draft() {
        assert_eq!(ContractStatus::default(), ContractStatus::Draft);
        let status: ContractStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, ContractStatus::Archived);
    }
}
