mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dcat")]
#[command(version, about = "Data catalog contract validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate contracts against the pipeline and technology rules
    Validate {
        /// Path to the catalog file (YAML, TOML or JSON)
        catalog: String,

        /// Only validate the contract with this id
        #[arg(long)]
        contract: Option<String>,

        /// Only validate contracts of this collection
        #[arg(long, conflicts_with = "contract")]
        collection: Option<String>,

        /// Reject contracts with an unrecognized layer while loading
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check catalog integrity and print its hierarchy
    Check {
        /// Path to the catalog file (YAML, TOML or JSON)
        catalog: String,

        /// Reject contracts with an unrecognized layer while loading
        #[arg(short, long)]
        strict: bool,
    },

    /// Show which pipeline types each layer allows
    Rules {
        /// Only show this layer (Bronze, Silver, Gold, Model)
        layer: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            catalog,
            contract,
            collection,
            strict,
            format,
        } => commands::validate::execute(
            &catalog,
            contract.as_deref(),
            collection.as_deref(),
            strict,
            &format,
        ),

        Commands::Check { catalog, strict } => commands::check::execute(&catalog, strict),

        Commands::Rules { layer, format } => commands::rules::execute(layer.as_deref(), &format),
    }
}
