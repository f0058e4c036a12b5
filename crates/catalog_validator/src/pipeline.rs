//! Layer to pipeline-type rules.
//!
//! Each layer admits a fixed set of pipeline types. An unrecognized layer
//! admits none, so every product attached to it is flagged.

use crate::ValidationError;
use catalog_core::{DataProduct, Layer, PipelineType};
use serde::Serialize;
use std::collections::BTreeSet;

/// Returns the pipeline types a product may use under the given layer.
///
/// | Layer | Allowed |
/// |---|---|
/// | Bronze | ingestion |
/// | Silver, Gold | processing, model_inference, model_serving |
/// | Model | model_training |
/// | unrecognized | none |
///
/// # Example
///
/// ```rust
/// use catalog_core::{Layer, PipelineType};
/// use catalog_validator::recommended_pipeline_types;
///
/// let allowed = recommended_pipeline_types(&Layer::Bronze);
/// assert!(allowed.contains(&PipelineType::Ingestion));
/// assert_eq!(allowed.len(), 1);
/// ```
pub fn recommended_pipeline_types(layer: &Layer) -> BTreeSet<PipelineType> {
    let allowed: &[PipelineType] = match layer {
        Layer::Bronze => &[PipelineType::Ingestion],
        Layer::Silver | Layer::Gold => &[
            PipelineType::Processing,
            PipelineType::ModelInference,
            PipelineType::ModelServing,
        ],
        Layer::Model => &[PipelineType::ModelTraining],
        Layer::Unrecognized(_) => &[],
    };
    allowed.iter().copied().collect()
}

/// Human-readable description of one layer's pipeline rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerRule {
    /// The layer described
    pub layer: Layer,
    /// Pipeline types allowed under the layer
    pub allowed: BTreeSet<PipelineType>,
    /// One-line explanation for display next to validation results
    pub summary: String,
}

/// Describes the pipeline rule for a layer.
pub fn layer_rule(layer: &Layer) -> LayerRule {
    let summary = match layer {
        Layer::Bronze => "Bronze holds raw data; only ingestion pipelines may write to it.",
        Layer::Silver => {
            "Silver holds cleaned data; it is produced by processing jobs and may feed model inference or serving."
        }
        Layer::Gold => {
            "Gold holds business-ready data; it is produced by processing jobs and may feed model inference or serving."
        }
        Layer::Model => "Model holds ML training artifacts; only model training pipelines may produce it.",
        Layer::Unrecognized(_) => "Unrecognized layer; no pipeline type is allowed.",
    };

    LayerRule {
        layer: layer.clone(),
        allowed: recommended_pipeline_types(layer),
        summary: summary.to_string(),
    }
}

/// Checks every product's pipeline type against the contract layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PipelineTypeValidator;

impl PipelineTypeValidator {
    /// Creates a new pipeline type validator.
    pub fn new() -> Self {
        Self
    }

    /// Returns one error per product whose pipeline type the layer does not allow,
    /// in product order.
    pub fn validate(&self, layer: &Layer, products: &[&DataProduct]) -> Vec<ValidationError> {
        let allowed = recommended_pipeline_types(layer);
        products
            .iter()
            .filter(|p| !allowed.contains(&p.pipeline_type))
            .map(|p| ValidationError::disallowed(&p.name, p.pipeline_type, layer))
            .collect()
    }
}
