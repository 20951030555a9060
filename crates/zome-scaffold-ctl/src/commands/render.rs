//! `zome-scaffold-ctl render`: print or write the integrity zome `lib.rs`.

use std::path::Path;

use zome_scaffold_sdk::codegen::render_integrity_lib_with;

use super::{ensure_valid, DefinitionArgs};
use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;

pub(crate) fn handle_render_command(
    source: &DefinitionArgs,
    output_path: Option<&Path>,
    config: &CliConfig,
) -> CtlResult<()> {
    let definition = source.load()?;
    ensure_valid(&definition, config)?;

    let file = render_integrity_lib_with(&definition, &config.scaffold_options())?;
    let content = file.content().unwrap_or_default();

    match output_path {
        Some(path) => {
            write_file(path, content)?;
            output::success(format!(
                "Rendered {} entry type(s) to {}",
                definition.entry_defs.len(),
                path.display()
            ));
        }
        None => output::source(content),
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> CtlResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CtlError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| CtlError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> DefinitionArgs {
        DefinitionArgs {
            entry: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/src/lib.rs");

        handle_render_command(&entries(&["my thing"]), Some(&path), &CliConfig::default())
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("mod my_thing;"));
        assert!(written.contains("use my_thing::MyThing;"));
        assert!(written.contains("MyThing(MyThing),"));
    }

    #[test]
    fn test_render_applies_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.rs");
        let config = CliConfig {
            required_validations: Some(1),
            ..Default::default()
        };

        handle_render_command(&entries(&["post"]), Some(&path), &config).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("#[entry_def(required_validations = 1)]"));
    }

    #[test]
    fn test_render_rejects_invalid_names_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.rs");

        let result = handle_render_command(&entries(&["fn"]), Some(&path), &CliConfig::default());

        assert!(matches!(result, Err(CtlError::Validation(_))));
        assert!(!path.exists());
    }
}
