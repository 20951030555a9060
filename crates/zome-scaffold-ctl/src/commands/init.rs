//! `zome-scaffold-ctl init`: bootstrap a `.zome-scaffold.toml` with defaults.

use std::path::Path;

use askama::Template;
use zome_scaffold_sdk::codegen::DEFAULT_REQUIRED_VALIDATIONS;
use zome_scaffold_sdk::versions::HDI_VERSION;

use crate::cli_config::loader::CONFIG_FILENAME;
use crate::error::{CtlError, CtlResult};
use crate::output;

/// Askama template for generating `.zome-scaffold.toml`.
#[derive(Template, Debug)]
#[template(path = "init-config.toml", escape = "none")]
struct InitConfigTemplate<'a> {
    default_output_dir: &'a str,
    required_validations: u8,
    hdi_version: &'a str,
}

pub(crate) fn handle_init_command(dir: &Path) -> CtlResult<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        output::warning(format!("{CONFIG_FILENAME} already exists in this directory."));
        output::hint("Remove it first if you want to reinitialize.");
        return Err(CtlError::AlreadyExists(config_path));
    }

    let template = InitConfigTemplate {
        default_output_dir: "zomes",
        required_validations: DEFAULT_REQUIRED_VALIDATIONS,
        hdi_version: HDI_VERSION,
    };
    let content = template.render()?;

    std::fs::write(&config_path, content).map_err(|e| CtlError::Io {
        path: config_path.clone(),
        source: e,
    })?;

    output::success(format!("Created {CONFIG_FILENAME}"));
    output::hint("Next: zome-scaffold-ctl scaffold --definition zome.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_config::CliConfig;

    #[test]
    fn test_init_writes_parseable_config() {
        let dir = tempfile::tempdir().unwrap();
        handle_init_command(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        let config: CliConfig = toml::from_str(&content).unwrap();

        assert_eq!(config.default_output_dir.as_deref(), Some("zomes"));
        assert_eq!(
            config.required_validations,
            Some(DEFAULT_REQUIRED_VALIDATIONS)
        );
        assert_eq!(config.hdi_version.as_deref(), Some(HDI_VERSION));
        assert!(config.strict_validation);
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "# mine\n").unwrap();

        let result = handle_init_command(dir.path());
        assert!(matches!(result, Err(CtlError::AlreadyExists(_))));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap(),
            "# mine\n"
        );
    }
}
