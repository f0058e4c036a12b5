use anyhow::{anyhow, Context, Result};
use catalog_core::{Catalog, DataContract};
use catalog_parser::load_catalog;
use catalog_validator::{validate_collection, CollectionSummary};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    catalog_path: &str,
    contract_id: Option<&str>,
    collection_id: Option<&str>,
    strict: bool,
    format: &str,
) -> Result<()> {
    info!("Validating catalog: {}", catalog_path);
    info!("Strict layers: {}", strict);

    let config = super::loader_config(strict, false);
    let catalog = load_catalog(Path::new(catalog_path), &config)
        .with_context(|| format!("Failed to load catalog file: {}", catalog_path))?;

    // Results are keyed by contract id, so repeated ids would shadow each other.
    let duplicates = catalog.check_unique_ids();
    if !duplicates.is_empty() {
        return Err(anyhow!(
            "Catalog ids must be unique: {}",
            duplicates
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        ));
    }

    let contracts = select_contracts(&catalog, contract_id, collection_id)?;
    if format != "json" {
        output::print_info(&format!(
            "Validating {} contract(s) against {} product(s)",
            contracts.len(),
            catalog.products.len()
        ));
    }

    // Products of every contract stay in scope; the engine filters per contract.
    let results = validate_collection(&contracts, &catalog.products);
    let summary = CollectionSummary::from_results(&results);

    output::print_collection_report(&contracts, &results, &summary, format)?;

    if !summary.all_valid() {
        std::process::exit(1);
    }

    Ok(())
}

/// Applies the `--contract` and `--collection` filters.
fn select_contracts(
    catalog: &Catalog,
    contract_id: Option<&str>,
    collection_id: Option<&str>,
) -> Result<Vec<DataContract>> {
    if let Some(id) = contract_id {
        let contract = catalog
            .contract(id)
            .ok_or_else(|| anyhow!("Contract '{}' not found in catalog", id))?;
        return Ok(vec![contract.clone()]);
    }

    if let Some(id) = collection_id {
        let contracts: Vec<DataContract> = catalog.contracts_in_collection(id).cloned().collect();
        if contracts.is_empty() {
            return Err(anyhow!("Collection '{}' has no contracts", id));
        }
        return Ok(contracts);
    }

    Ok(catalog.contracts.clone())
}
