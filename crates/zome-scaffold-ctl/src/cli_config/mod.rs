//! CLI configuration for output locations and generation defaults.

pub(crate) mod loader;

pub(crate) use loader::load_cli_config;

use serde::Deserialize;
use zome_scaffold_sdk::ScaffoldOptions;

fn default_strict_validation() -> bool {
    true
}

/// Settings read from `.zome-scaffold.toml`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Default directory for `scaffold` output.
    pub default_output_dir: Option<String>,

    /// Override for `required_validations` on generated entry defs.
    pub required_validations: Option<u8>,

    /// Override for the HDI version written into generated manifests.
    pub hdi_version: Option<String>,

    /// Validate definitions before rendering. Default: true.
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_output_dir: None,
            required_validations: None,
            hdi_version: None,
            strict_validation: default_strict_validation(),
        }
    }
}

impl CliConfig {
    /// Generation options with config overrides applied over the SDK defaults.
    pub fn scaffold_options(&self) -> ScaffoldOptions {
        let mut options = ScaffoldOptions::default();
        if let Some(required_validations) = self.required_validations {
            options.required_validations = required_validations;
        }
        if let Some(hdi_version) = &self.hdi_version {
            options.hdi_version = hdi_version.clone();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.default_output_dir.is_none());
        assert!(config.strict_validation);
        assert_eq!(config.scaffold_options(), ScaffoldOptions::default());
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
default-output-dir = "./dnas/forum/zomes/integrity"
required-validations = 3
hdi-version = "0.3.0"
strict-validation = false
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.default_output_dir.as_deref(),
            Some("./dnas/forum/zomes/integrity")
        );
        assert!(!config.strict_validation);

        let options = config.scaffold_options();
        assert_eq!(options.required_validations, 3);
        assert_eq!(options.hdi_version, "0.3.0");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: CliConfig = toml::from_str("required-validations = 1\n").unwrap();
        assert!(config.strict_validation);
        assert!(config.hdi_version.is_none());
        assert_eq!(config.scaffold_options().required_validations, 1);
    }
}
