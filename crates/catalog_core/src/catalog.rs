//! Catalog hierarchy: domains, collections, contracts and products.

use crate::{CatalogError, DataContract, DataProduct};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("version pattern is valid")
});

/// A business domain grouping collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Unique domain identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// A collection of related contracts inside a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Unique collection identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning domain
    pub domain_id: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// A fully materialized catalog.
///
/// All sections are optional in documents; a catalog with only contracts and
/// products is enough to run validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Business domains
    #[serde(default)]
    pub domains: Vec<Domain>,
    /// Contract collections
    #[serde(default)]
    pub collections: Vec<Collection>,
    /// Data contracts
    #[serde(default)]
    pub contracts: Vec<DataContract>,
    /// Data products
    #[serde(default)]
    pub products: Vec<DataProduct>,
}

impl Catalog {
    /// Looks up a contract by id.
    pub fn contract(&self, id: &str) -> Option<&DataContract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Products implementing the given contract, in catalog order.
    pub fn products_for_contract<'a>(
        &'a self,
        contract_id: &'a str,
    ) -> impl Iterator<Item = &'a DataProduct> + 'a {
        self.products
            .iter()
            .filter(move |p| p.data_contract_id == contract_id)
    }

    /// Contracts belonging to the given collection, in catalog order.
    pub fn contracts_in_collection<'a>(
        &'a self,
        collection_id: &'a str,
    ) -> impl Iterator<Item = &'a DataContract> + 'a {
        self.contracts
            .iter()
            .filter(move |c| c.fundamentals.collection_id == collection_id)
    }

    /// Collections belonging to the given domain, in catalog order.
    pub fn collections_in_domain<'a>(
        &'a self,
        domain_id: &'a str,
    ) -> impl Iterator<Item = &'a Collection> + 'a {
        self.collections
            .iter()
            .filter(move |c| c.domain_id == domain_id)
    }

    /// Reports missing and repeated ids for every entity kind.
    ///
    /// Results keyed by id (such as collection validation) are only
    /// meaningful when this returns an empty list.
    pub fn check_unique_ids(&self) -> Vec<CatalogError> {
        let mut errors = Vec::new();

        check_ids(self.domains.iter().map(|d| d.id.as_str()), "domain", &mut errors);
        check_ids(
            self.collections.iter().map(|c| c.id.as_str()),
            "collection",
            &mut errors,
        );
        check_ids(
            self.contracts.iter().map(|c| c.id.as_str()),
            "contract",
            &mut errors,
        );
        check_ids(self.products.iter().map(|p| p.id.as_str()), "product", &mut errors);

        errors
    }

    /// Checks the catalog for structural problems.
    ///
    /// Reports duplicate ids, missing ids, dangling references, unrecognized
    /// layers and malformed contract versions. Collection and domain
    /// references are only checked when the catalog declares collections or
    /// domains at all. An empty list means the catalog is consistent.
    pub fn check_integrity(&self) -> Vec<CatalogError> {
        let mut errors = self.check_unique_ids();

        if !self.domains.is_empty() {
            let domain_ids: HashSet<&str> = self.domains.iter().map(|d| d.id.as_str()).collect();
            for collection in &self.collections {
                if !domain_ids.contains(collection.domain_id.as_str()) {
                    errors.push(CatalogError::DanglingReference {
                        kind: "collection",
                        id: collection.id.clone(),
                        target: "domain",
                        target_id: collection.domain_id.clone(),
                    });
                }
            }
        }

        if !self.collections.is_empty() {
            let collection_ids: HashSet<&str> =
                self.collections.iter().map(|c| c.id.as_str()).collect();
            for contract in &self.contracts {
                let target = &contract.fundamentals.collection_id;
                if !collection_ids.contains(target.as_str()) {
                    errors.push(CatalogError::DanglingReference {
                        kind: "contract",
                        id: contract.id.clone(),
                        target: "collection",
                        target_id: target.clone(),
                    });
                }
            }
        }

        for contract in &self.contracts {
            if !contract.tags.layer.is_recognized() {
                errors.push(CatalogError::ContractLayer {
                    contract: contract.id.clone(),
                    layer: contract.tags.layer.to_string(),
                });
            }
            if !VERSION_PATTERN.is_match(&contract.fundamentals.version) {
                errors.push(CatalogError::InvalidVersion {
                    contract: contract.id.clone(),
                    version: contract.fundamentals.version.clone(),
                });
            }
        }

        let contract_ids: HashSet<&str> = self.contracts.iter().map(|c| c.id.as_str()).collect();
        for product in &self.products {
            if !contract_ids.contains(product.data_contract_id.as_str()) {
                errors.push(CatalogError::DanglingReference {
                    kind: "product",
                    id: product.id.clone(),
                    target: "contract",
                    target_id: product.data_contract_id.clone(),
                });
            }
        }

        errors
    }
}

fn check_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &'static str,
    errors: &mut Vec<CatalogError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            errors.push(CatalogError::MissingField(format!("{kind}.id")));
        } else if !seen.insert(id) {
            errors.push(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataContractBuilder, DataProductBuilder, Layer, PipelineType};
    use pretty_assertions::assert_eq;

    fn sample_catalog() -> Catalog {
        Catalog {
            domains: vec![Domain {
                id: "d-sales".to_string(),
                name: "Sales".to_string(),
                description: None,
            }],
            collections: vec![Collection {
                id: "col-orders".to_string(),
                name: "Orders".to_string(),
                domain_id: "d-sales".to_string(),
                description: None,
            }],
            contracts: vec![
                DataContractBuilder::new("c-raw", "raw_orders")
                    .layer(Layer::Bronze)
                    .collection("col-orders")
                    .build(),
                DataContractBuilder::new("c-clean", "clean_orders")
                    .layer(Layer::Silver)
                    .collection("col-orders")
                    .build(),
            ],
            products: vec![
                DataProductBuilder::new("p-1", "orders_ingest", "c-raw", PipelineType::Ingestion)
                    .technology("Airbyte")
                    .build(),
                DataProductBuilder::new("p-2", "orders_clean", "c-clean", PipelineType::Processing)
                    .technology("dbt")
                    .build(),
            ],
        }
    }

    #[test]
    fn test_hierarchy_lookups() {
        let catalog = sample_catalog();

        assert_eq!(catalog.contract("c-raw").unwrap().name(), "raw_orders");
        assert!(catalog.contract("missing").is_none());

        let products: Vec<_> = catalog.products_for_contract("c-clean").collect();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "orders_clean");

        assert_eq!(catalog.contracts_in_collection("col-orders").count(), 2);
        assert_eq!(catalog.collections_in_domain("d-sales").count(), 1);
        assert_eq!(catalog.collections_in_domain("d-other").count(), 0);
    }

    #[test]
    fn test_consistent_catalog_has_no_integrity_errors() {
        let errors = sample_catalog().check_integrity();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_integrity_reports_duplicates_and_dangling_references() {
        let mut catalog = sample_catalog();
        catalog.products.push(
            DataProductBuilder::new("p-1", "orphan", "c-gone", PipelineType::Processing).build(),
        );

        let messages: Vec<String> = catalog
            .check_integrity()
            .iter()
            .map(|e| e.to_string())
            .collect();

        assert_eq!(
            messages,
            vec![
                "Duplicate product id: 'p-1'".to_string(),
                "product 'p-1' references unknown contract 'c-gone'".to_string(),
            ]
        );
    }

    #[test]
    fn test_integrity_reports_unknown_layer_and_bad_version() {
        let mut catalog = sample_catalog();
        catalog.contracts.push(
            DataContractBuilder::new("c-odd", "odd")
                .layer(Layer::parse("Platinum"))
                .version("latest")
                .collection("col-orders")
                .build(),
        );

        let errors = catalog.check_integrity();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].to_string(),
            "Contract 'c-odd' has unrecognized layer 'Platinum'"
        );
        assert!(matches!(errors[1], CatalogError::InvalidVersion { ref version, .. } if version == "latest"));
    }

    #[test]
    fn test_version_must_be_major_minor_patch() {
        for (version, valid) in [
            ("1.0", true),
            ("2.10.3", true),
            ("v1.0.0", false),
            ("1.0.0-rc1", false),
            ("1", false),
        ] {
            let mut catalog = sample_catalog();
            catalog.contracts[0].fundamentals.version = version.to_string();
            assert_eq!(catalog.check_integrity().is_empty(), valid, "version {version}");
        }
    }

    #[test]
    fn test_unique_ids_flags_repeated_contract() {
        let mut catalog = sample_catalog();
        catalog.contracts.push(
            DataContractBuilder::new("c-raw", "gold_orders")
                .layer(Layer::Gold)
                .collection("col-orders")
                .build(),
        );

        let messages: Vec<String> = catalog
            .check_unique_ids()
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(messages, vec!["Duplicate contract id: 'c-raw'".to_string()]);
        assert!(sample_catalog().check_unique_ids().is_empty());
    }

    #[test]
    fn test_collection_references_skipped_without_collections() {
        let mut catalog = sample_catalog();
        catalog.domains.clear();
        catalog.collections.clear();
        assert!(catalog.check_integrity().is_empty());
    }
}
