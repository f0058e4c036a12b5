use anyhow::Result;
use catalog_core::{CollectionResults, DataContract, ValidationResult};
use catalog_validator::{CollectionSummary, LayerRule};
use colored::*;
use serde_json::json;

pub fn print_collection_report(
    contracts: &[DataContract],
    results: &CollectionResults,
    summary: &CollectionSummary,
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_json_report(results, summary),
        _ => {
            print_text_report(contracts, results, summary);
            Ok(())
        }
    }
}

fn print_text_report(
    contracts: &[DataContract],
    results: &CollectionResults,
    summary: &CollectionSummary,
) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    for contract in contracts {
        if let Some(result) = results.get(&contract.id) {
            print_contract_result(contract, result);
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Contracts:      {}", summary.contracts);
    println!("  Valid:          {}", summary.valid);
    println!("  Invalid:        {}", summary.invalid);
    println!("  Total errors:   {}", summary.errors);
    println!("  Total warnings: {}", summary.warnings);
    println!("{}", "═".repeat(60));

    if summary.all_valid() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }
}

fn print_contract_result(contract: &DataContract, result: &ValidationResult) {
    let badge = if result.is_valid {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    println!(
        "\n{} {} ({}, layer {})",
        badge,
        contract.name().bold(),
        contract.id,
        contract.tags.layer
    );

    for (i, error) in result.errors.iter().enumerate() {
        println!("    {}. {}", i + 1, error.red());
    }
    for warning in &result.warnings {
        println!("    ! {}", warning.yellow());
    }
}

fn print_json_report(results: &CollectionResults, summary: &CollectionSummary) -> Result<()> {
    let output = json!({
        "results": results,
        "summary": summary,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_rules(rules: &[LayerRule], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(rules)?);
        return Ok(());
    }

    println!("{}", "Layer rules:".bold());
    for rule in rules {
        let allowed = rule
            .allowed
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("\n  {:<8} {}", rule.layer.to_string().bold(), allowed.cyan());
        println!("           {}", rule.summary);
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
