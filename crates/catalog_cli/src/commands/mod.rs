pub mod check;
pub mod rules;
pub mod validate;

use catalog_parser::{LoaderConfig, LoaderConfigBuilder};

/// Loader options from `DCAT_*` environment variables, with CLI flags layered on top.
fn loader_config(strict: bool, check_references: bool) -> LoaderConfig {
    let env = LoaderConfig::from_env();
    LoaderConfigBuilder::from_config(env.clone())
        .strict_layers(strict || env.strict_layers)
        .check_references(check_references || env.check_references)
        .build()
}
