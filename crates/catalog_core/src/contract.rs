//! Data contract and data product types.
//!
//! A [`DataContract`] declares what a dataset looks like and who owns it; a
//! [`DataProduct`] is a pipeline or service that implements one contract.
//! Field names serialize in camelCase to match catalog documents.

use crate::{ContractStatus, Layer, PipelineType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A data contract describing a dataset's schema, ownership and quality expectations.
///
/// # Example
///
/// ```rust
/// use catalog_core::{DataContractBuilder, Layer};
///
/// let contract = DataContractBuilder::new("c-orders", "orders")
///     .layer(Layer::Silver)
///     .owner("sales-data")
///     .table_name("silver.orders")
///     .build();
///
/// assert_eq!(contract.tags.layer, Layer::Silver);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataContract {
    /// Unique contract identifier
    pub id: String,

    /// Naming, ownership and placement in the catalog
    pub fundamentals: Fundamentals,

    /// Layer, status and free-form tags
    pub tags: ContractTags,

    /// Usage terms, keyed by term name
    #[serde(default)]
    pub terms: BTreeMap<String, String>,

    /// Table definition
    pub schema: ContractSchema,

    /// Data quality expectations
    #[serde(default)]
    pub quality_rules: Vec<QualityRule>,
}

impl DataContract {
    /// Contract name, shorthand for `fundamentals.name`.
    pub fn name(&self) -> &str {
        &self.fundamentals.name
    }

    /// Contract layer, shorthand for `tags.layer`.
    pub fn layer(&self) -> &Layer {
        &self.tags.layer
    }
}

/// Identifying metadata of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    /// Human-readable contract name
    pub name: String,

    /// Contract version (e.g. "1.2.0")
    pub version: String,

    /// Owning team or person
    pub owner: String,

    /// Business domain the contract belongs to
    pub domain: String,

    /// Collection grouping the contract
    pub collection_id: String,

    /// Optional description of the dataset
    #[serde(default)]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Classification tags of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTags {
    /// Data maturity tier
    pub layer: Layer,

    /// Publication status
    #[serde(default)]
    pub status: ContractStatus,

    /// Any other tags
    #[serde(default)]
    pub extra: Vec<String>,
}

/// Table definition of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContractSchema {
    /// Physical table name
    pub table_name: String,

    /// Ordered column list
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A single column of a contract schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name
    pub name: String,

    /// Column data type (e.g. "string", "decimal(10,2)")
    #[serde(rename = "type")]
    pub column_type: String,

    /// Whether the column accepts nulls
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_nullable() -> bool {
    true
}

/// A data quality rule attached to a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRule {
    /// Rule name
    pub name: String,

    /// Rule kind (e.g. "not_null", "unique", "freshness")
    #[serde(rename = "type", default)]
    pub rule_type: Option<String>,

    /// Column the rule applies to, if any
    #[serde(default)]
    pub column: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Minimum pass ratio (0.0 to 1.0)
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Severity (e.g. "error", "warning")
    #[serde(default)]
    pub severity: Option<String>,
}

/// A concrete pipeline or service that implements a data contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProduct {
    /// Unique product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Id of the contract this product implements
    pub data_contract_id: String,

    /// Technology the pipeline runs on (e.g. "Spark", "dbt")
    #[serde(default)]
    pub technology: Option<String>,

    /// Kind of job the product runs
    pub pipeline_type: PipelineType,

    /// Outcome of the most recent run
    #[serde(default)]
    pub last_execution: Option<LastExecution>,

    /// Environments the product is deployed to
    #[serde(default)]
    pub deployments: Option<Vec<Deployment>>,

    /// Source repository links
    #[serde(default)]
    pub github: Option<GithubLinks>,
}

impl DataProduct {
    /// Returns the technology when it is set and not blank.
    pub fn technology(&self) -> Option<&str> {
        self.technology
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Status of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Finished without error
    Success,
    /// Finished with an error
    Failed,
    /// Still in progress
    Running,
}

/// Most recent execution of a data product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastExecution {
    /// Run status
    pub status: ExecutionStatus,

    /// When the run started
    pub date: DateTime<Utc>,

    /// Run duration as reported by the scheduler (e.g. "12m 30s")
    #[serde(default)]
    pub duration: Option<String>,

    /// Error message of a failed run
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A deployment of a data product to an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Target environment (e.g. "dev", "prod")
    pub environment: String,

    /// Deployed version
    #[serde(default)]
    pub version: Option<String>,

    /// Deployment timestamp
    #[serde(default)]
    pub deployed_at: Option<DateTime<Utc>>,
}

/// Repository links of a data product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubLinks {
    /// Repository URL
    pub repo_url: String,

    /// Documentation site URL
    #[serde(default)]
    pub pages_url: Option<String>,
}
