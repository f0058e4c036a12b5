use anyhow::{Context, Result};
use catalog_core::{Catalog, DataContract};
use catalog_parser::load_catalog;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(catalog_path: &str, strict: bool) -> Result<()> {
    info!("Checking catalog: {}", catalog_path);

    let config = super::loader_config(strict, true);
    let catalog = load_catalog(Path::new(catalog_path), &config)
        .with_context(|| format!("Failed to load catalog file: {}", catalog_path))?;

    output::print_success("Catalog is consistent");

    println!("\nCatalog Summary:");
    println!("  Domains:     {}", catalog.domains.len());
    println!("  Collections: {}", catalog.collections.len());
    println!("  Contracts:   {}", catalog.contracts.len());
    println!("  Products:    {}", catalog.products.len());

    print_hierarchy(&catalog);

    Ok(())
}

fn print_hierarchy(catalog: &Catalog) {
    if catalog.collections.is_empty() {
        println!("\nContracts:");
        for contract in &catalog.contracts {
            print_contract(catalog, contract, "  ");
        }
        return;
    }

    for domain in &catalog.domains {
        println!("\n{} ({})", domain.name, domain.id);
        for collection in catalog.collections_in_domain(&domain.id) {
            println!("  {} ({})", collection.name, collection.id);
            for contract in catalog.contracts_in_collection(&collection.id) {
                print_contract(catalog, contract, "    ");
            }
        }
    }

    // Collections exist but no domains were declared
    if catalog.domains.is_empty() {
        for collection in &catalog.collections {
            println!("\n{} ({})", collection.name, collection.id);
            for contract in catalog.contracts_in_collection(&collection.id) {
                print_contract(catalog, contract, "  ");
            }
        }
    }
}

fn print_contract(catalog: &Catalog, contract: &DataContract, indent: &str) {
    println!(
        "{}- {} v{} [{}, {}] {} product(s)",
        indent,
        contract.name(),
        contract.fundamentals.version,
        contract.tags.layer,
        contract.tags.status,
        catalog.products_for_contract(&contract.id).count()
    );
}
