//! Integration tests for the contract rule engine.
//!
//! These tests load a realistic catalog document and check the behaviour
//! the catalog UI relies on: layer rules, technology uniqueness, advisory
//! warnings and per-collection results.

use catalog_core::{
    Catalog, ContractValidator, DataContract, DataContractBuilder, DataProduct,
    DataProductBuilder, Layer, PipelineType,
};
use catalog_parser::parse_yaml;
use catalog_validator::{
    recommended_pipeline_types, validate_collection, validate_data_contract, CollectionSummary,
    DataContractValidator,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

const CATALOG: &str = r#"
domains:
  - id: d-commerce
    name: Commerce
collections:
  - id: col-orders
    name: Orders
    domainId: d-commerce
contracts:
  - id: c-raw-orders
    fundamentals: { name: raw_orders, version: "1.0.0", owner: ingest-team, domain: commerce, collectionId: col-orders }
    tags: { layer: Bronze, status: published }
    schema: { tableName: bronze.orders }
  - id: c-orders
    fundamentals: { name: orders, version: "2.0.0", owner: sales-data, domain: commerce, collectionId: col-orders }
    tags: { layer: Silver, status: published }
    schema: { tableName: silver.orders }
  - id: c-revenue
    fundamentals: { name: revenue, version: "1.1.0", owner: finance, domain: commerce, collectionId: col-orders }
    tags: { layer: Gold, status: draft }
    schema: { tableName: gold.revenue }
  - id: c-forecast
    fundamentals: { name: demand_forecast, version: "0.1.0", owner: ml-team, domain: commerce, collectionId: col-orders }
    tags: { layer: Model, status: draft }
    schema: { tableName: ml.demand_forecast }
products:
  - { id: p-1, name: orders_airbyte, dataContractId: c-raw-orders, technology: Airbyte, pipelineType: ingestion }
  - { id: p-2, name: orders_transform, dataContractId: c-raw-orders, technology: dbt, pipelineType: processing }
  - { id: p-3, name: orders_clean_spark, dataContractId: c-orders, technology: Spark, pipelineType: processing }
  - { id: p-4, name: orders_scoring, dataContractId: c-orders, technology: Spark, pipelineType: model_inference }
  - { id: p-5, name: revenue_dbt, dataContractId: c-revenue, technology: dbt, pipelineType: processing }
  - { id: p-6, name: revenue_api, dataContractId: c-revenue, pipelineType: model_serving }
"#;

fn load() -> Catalog {
    parse_yaml(CATALOG).expect("fixture catalog should parse")
}

fn contract(id: &str, layer: Layer) -> DataContract {
    DataContractBuilder::new(id, id).layer(layer).build()
}

fn product(name: &str, contract_id: &str, pipeline_type: PipelineType, tech: &str) -> DataProduct {
    DataProductBuilder::new(name, name, contract_id, pipeline_type)
        .technology(tech)
        .build()
}

#[test]
fn test_recommended_pipeline_types_per_layer() {
    let set = |types: &[PipelineType]| types.iter().copied().collect::<BTreeSet<_>>();

    assert_eq!(
        recommended_pipeline_types(&Layer::Bronze),
        set(&[PipelineType::Ingestion])
    );
    assert_eq!(
        recommended_pipeline_types(&Layer::Model),
        set(&[PipelineType::ModelTraining])
    );
    for layer in [Layer::Silver, Layer::Gold] {
        assert_eq!(
            recommended_pipeline_types(&layer),
            set(&[
                PipelineType::Processing,
                PipelineType::ModelInference,
                PipelineType::ModelServing
            ])
        );
    }
}

#[test]
fn test_bronze_contract_with_processing_product() {
    let catalog = load();
    let raw = catalog.contract("c-raw-orders").unwrap();

    let result = validate_data_contract(raw, &catalog.products);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("orders_transform"));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_silver_contract_with_shared_spark() {
    let catalog = load();
    let orders = catalog.contract("c-orders").unwrap();

    let result = validate_data_contract(orders, &catalog.products);

    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["Technology 'Spark' is used by multiple products: 'orders_clean_spark', 'orders_scoring'"]
    );
}

#[test]
fn test_gold_contract_missing_technology_is_only_a_warning() {
    let catalog = load();
    let revenue = catalog.contract("c-revenue").unwrap();

    let result = validate_data_contract(revenue, &catalog.products);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings, vec!["Product 'revenue_api' has no technology specified"]);
}

#[test]
fn test_gold_contract_with_two_spark_processing_products() {
    let gold = contract("c", Layer::Gold);
    let products = vec![
        product("first", "c", PipelineType::Processing, "Spark"),
        product("second", "c", PipelineType::Processing, "Spark"),
    ];

    let result = validate_data_contract(&gold, &products);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("'first'"));
    assert!(result.errors[0].contains("'second'"));
}

#[test]
fn test_gold_contract_with_distinct_technologies() {
    let gold = contract("c", Layer::Gold);
    let products = vec![
        product("spark_job", "c", PipelineType::Processing, "Spark"),
        product("dbt_job", "c", PipelineType::Processing, "dbt"),
    ];

    let result = validate_data_contract(&gold, &products);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_contract_without_products() {
    let result = validate_data_contract(&contract("lonely", Layer::Silver), &[]);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("no associated products"));
}

#[test]
fn test_validation_is_idempotent() {
    let catalog = load();
    let validator = DataContractValidator::new();

    for contract in &catalog.contracts {
        let first = validator.validate(contract, &catalog.products);
        let second = validator.validate(contract, &catalog.products);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn test_collection_has_entry_for_every_contract() {
    let catalog = load();

    let results = validate_collection(&catalog.contracts, &catalog.products);

    let ids: Vec<&str> = results.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["c-forecast", "c-orders", "c-raw-orders", "c-revenue"]);
    assert_eq!(
        results["c-forecast"].warnings,
        vec!["Contract has no associated products"]
    );

    let summary = CollectionSummary::from_results(&results);
    assert_eq!(summary.contracts, 4);
    assert_eq!(summary.invalid, 2);
    assert_eq!(summary.warnings, 2);
}

#[test]
fn test_collection_matches_per_contract_results() {
    let catalog = load();
    let results = validate_collection(&catalog.contracts, &catalog.products);

    for contract in &catalog.contracts {
        assert_eq!(
            results[&contract.id],
            validate_data_contract(contract, &catalog.products)
        );
    }
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let catalog = load();
    let validator = DataContractValidator::new();
    let expected = validate_collection(&catalog.contracts, &catalog.products);

    std::thread::scope(|scope| {
        let handles: Vec<_> = catalog
            .contracts
            .iter()
            .map(|contract| {
                let products = &catalog.products;
                scope.spawn(move || (contract.id.clone(), validator.validate(contract, products)))
            })
            .collect();

        for handle in handles {
            let (id, result) = handle.join().unwrap();
            assert_eq!(result, expected[&id]);
        }
    });
}
