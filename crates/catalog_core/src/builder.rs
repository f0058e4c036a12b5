//! Builder pattern for creating catalog entities.
//!
//! This module provides ergonomic builders for constructing contracts,
//! columns and products with a fluent API.

use crate::{
    Column, ContractSchema, ContractStatus, ContractTags, DataContract, DataProduct, Deployment,
    Fundamentals, GithubLinks, LastExecution, Layer, PipelineType, QualityRule,
};
use std::collections::BTreeMap;

/// Builder for creating a `DataContract`.
///
/// Unset fields default to version `1.0.0`, layer Bronze, status draft and
/// empty owner, domain and collection.
///
/// # Example
///
/// ```rust
/// use catalog_core::{ColumnBuilder, ContractStatus, DataContractBuilder, Layer};
///
/// let contract = DataContractBuilder::new("c-events", "user_events")
///     .version("2.1.0")
///     .owner("analytics-team")
///     .domain("marketing")
///     .collection("col-web")
///     .layer(Layer::Gold)
///     .status(ContractStatus::Published)
///     .column(ColumnBuilder::new("user_id", "string").nullable(false).build())
///     .build();
///
/// assert_eq!(contract.schema.columns.len(), 1);
/// ```
#[derive(Debug)]
pub struct DataContractBuilder {
    id: String,
    name: String,
    version: String,
    owner: String,
    domain: String,
    collection_id: String,
    description: Option<String>,
    layer: Layer,
    status: ContractStatus,
    extra_tags: Vec<String>,
    terms: BTreeMap<String, String>,
    table_name: String,
    columns: Vec<Column>,
    quality_rules: Vec<QualityRule>,
}

impl DataContractBuilder {
    /// Creates a new contract builder.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique contract id
    /// * `name` - Contract name, also used as the default table name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            table_name: name.clone(),
            name,
            version: "1.0.0".to_string(),
            owner: String::new(),
            domain: String::new(),
            collection_id: String::new(),
            description: None,
            layer: Layer::Bronze,
            status: ContractStatus::default(),
            extra_tags: Vec::new(),
            terms: BTreeMap::new(),
            columns: Vec::new(),
            quality_rules: Vec::new(),
        }
    }

    /// Sets the contract version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the owner.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the business domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Sets the collection id.
    pub fn collection(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = collection_id.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the layer.
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: ContractStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds a free-form tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.extra_tags.push(tag.into());
        self
    }

    /// Adds a usage term.
    pub fn term(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.terms.insert(key.into(), description.into());
        self
    }

    /// Sets the physical table name.
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Appends a column to the schema.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends a quality rule.
    pub fn quality_rule(mut self, rule: QualityRule) -> Self {
        self.quality_rules.push(rule);
        self
    }

    /// Builds the contract.
    pub fn build(self) -> DataContract {
        DataContract {
            id: self.id,
            fundamentals: Fundamentals {
                name: self.name,
                version: self.version,
                owner: self.owner,
                domain: self.domain,
                collection_id: self.collection_id,
                description: self.description,
                created_at: None,
                updated_at: None,
            },
            tags: ContractTags {
                layer: self.layer,
                status: self.status,
                extra: self.extra_tags,
            },
            terms: self.terms,
            schema: ContractSchema {
                table_name: self.table_name,
                columns: self.columns,
            },
            quality_rules: self.quality_rules,
        }
    }
}

/// Builder for creating a `Column`.
///
/// Columns are nullable unless told otherwise.
#[derive(Debug)]
pub struct ColumnBuilder {
    name: String,
    column_type: String,
    nullable: bool,
    description: Option<String>,
}

impl ColumnBuilder {
    /// Creates a new column builder.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            nullable: true,
            description: None,
        }
    }

    /// Sets whether the column is nullable.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the column description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the column.
    pub fn build(self) -> Column {
        Column {
            name: self.name,
            column_type: self.column_type,
            nullable: self.nullable,
            description: self.description,
        }
    }
}

/// Builder for creating a `DataProduct`.
///
/// # Example
///
/// ```rust
/// use catalog_core::{DataProductBuilder, PipelineType};
///
/// let product = DataProductBuilder::new("p-1", "orders_ingest", "c-orders", PipelineType::Ingestion)
///     .technology("Spark")
///     .build();
///
/// assert_eq!(product.technology(), Some("Spark"));
/// ```
#[derive(Debug)]
pub struct DataProductBuilder {
    id: String,
    name: String,
    data_contract_id: String,
    pipeline_type: PipelineType,
    description: Option<String>,
    technology: Option<String>,
    last_execution: Option<LastExecution>,
    deployments: Option<Vec<Deployment>>,
    github: Option<GithubLinks>,
}

impl DataProductBuilder {
    /// Creates a new product builder with the fields every product needs.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        data_contract_id: impl Into<String>,
        pipeline_type: PipelineType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data_contract_id: data_contract_id.into(),
            pipeline_type,
            description: None,
            technology: None,
            last_execution: None,
            deployments: None,
            github: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the technology.
    pub fn technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    /// Sets the last execution.
    pub fn last_execution(mut self, execution: LastExecution) -> Self {
        self.last_execution = Some(execution);
        self
    }

    /// Adds a deployment.
    pub fn deployment(mut self, deployment: Deployment) -> Self {
        self.deployments
            .get_or_insert_with(Vec::new)
            .push(deployment);
        self
    }

    /// Sets repository links.
    pub fn github(mut self, repo_url: impl Into<String>, pages_url: Option<String>) -> Self {
        self.github = Some(GithubLinks {
            repo_url: repo_url.into(),
            pages_url,
        });
        self
    }

    /// Builds the product.
    pub fn build(self) -> DataProduct {
        DataProduct {
            id: self.id,
            name: self.name,
            description: self.description,
            data_contract_id: self.data_contract_id,
            technology: self.technology,
            pipeline_type: self.pipeline_type,
            last_execution: self.last_execution,
            deployments: self.deployments,
            github: self.github,
        }
    }
}
