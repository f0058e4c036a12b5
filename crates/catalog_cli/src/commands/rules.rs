use anyhow::Result;
use catalog_core::Layer;
use catalog_validator::layer_rule;

use crate::output;

pub fn execute(layer: Option<&str>, format: &str) -> Result<()> {
    let rules = match layer {
        Some(name) => vec![layer_rule(&Layer::parse_strict(name)?)],
        None => Layer::KNOWN.iter().map(layer_rule).collect(),
    };

    output::print_rules(&rules, format)
}
