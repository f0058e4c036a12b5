//! Loader configuration.

use crate::CatalogFormat;

/// Environment variable enabling strict layer parsing.
pub const ENV_STRICT_LAYERS: &str = "DCAT_STRICT_LAYERS";

/// Environment variable enabling catalog integrity checks.
pub const ENV_CHECK_REFERENCES: &str = "DCAT_CHECK_REFERENCES";

/// Options controlling how a catalog document is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Reject contracts whose layer is not Bronze, Silver, Gold or Model
    pub strict_layers: bool,

    /// Run [`Catalog::check_integrity`](catalog_core::Catalog::check_integrity) after parsing
    pub check_references: bool,

    /// Force a document format instead of detecting it from the extension
    pub format: Option<CatalogFormat>,
}

impl LoaderConfig {
    /// Creates a new builder for `LoaderConfig`.
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Reads the configuration from `DCAT_*` environment variables.
    ///
    /// Unset or unparsable variables leave the default in place.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).and_then(|v| parse_bool(&v)).unwrap_or(false);
        Self {
            strict_layers: flag(ENV_STRICT_LAYERS),
            check_references: flag(ENV_CHECK_REFERENCES),
            format: None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for `LoaderConfig`.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Starts from an existing configuration, e.g. one read from the environment.
    pub fn from_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Sets strict layer parsing.
    pub fn strict_layers(mut self, strict: bool) -> Self {
        self.config.strict_layers = strict;
        self
    }

    /// Sets whether integrity checks run after parsing.
    pub fn check_references(mut self, check: bool) -> Self {
        self.config.check_references = check;
        self
    }

    /// Forces a document format.
    pub fn format(mut self, format: CatalogFormat) -> Self {
        self.config.format = Some(format);
        self
    }

    /// Builds the `LoaderConfig`.
    pub fn build(self) -> LoaderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_lenient() {
        let config = LoaderConfig::default();
        assert!(!config.strict_layers);
        assert!(!config.check_references);
        assert!(config.format.is_none());
    }

    #[test]
    fn test_from_lookup_reads_flags() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_STRICT_LAYERS, "true"), (ENV_CHECK_REFERENCES, "0")]);
        let config = LoaderConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert!(config.strict_layers);
        assert!(!config.check_references);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = LoaderConfig::from_lookup(|_| Some("maybe".to_string()));
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let base = LoaderConfig::from_lookup(|_| Some("yes".to_string()));
        let config = LoaderConfigBuilder::from_config(base)
            .check_references(false)
            .format(CatalogFormat::Json)
            .build();

        assert!(config.strict_layers);
        assert!(!config.check_references);
        assert_eq!(config.format, Some(CatalogFormat::Json));
    }
}
