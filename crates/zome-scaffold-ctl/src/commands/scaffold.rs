//! `zome-scaffold-ctl scaffold`: write a complete integrity zome crate.

use std::path::{Path, PathBuf};

use zome_scaffold_sdk::codegen::scaffold_integrity_zome;
use zome_scaffold_sdk::file_tree::write_file_tree;

use super::{ensure_valid, DefinitionArgs};
use crate::cli_config::{loader::expand_path, CliConfig};
use crate::error::CtlResult;
use crate::output;

/// `name` overrides the zome name from the definition; it names the crate
/// directory and package.
pub(crate) fn handle_scaffold_command(
    source: &DefinitionArgs,
    name: Option<&str>,
    output_dir: Option<&Path>,
    force: bool,
    config: &CliConfig,
) -> CtlResult<Vec<PathBuf>> {
    let mut definition = source.load()?;
    if let Some(name) = name {
        definition.name = Some(name.to_string());
    }
    ensure_valid(&definition, config)?;

    let root = resolve_output_dir(output_dir, config);
    let tree = scaffold_integrity_zome(&definition, &config.scaffold_options())?;
    let written = write_file_tree(&root, &tree, force)?;

    output::header(format!("Scaffolded zome \"{}\"", definition.zome_name()));
    output::label("Location", root.display());
    for path in &written {
        output::item(path.display());
    }
    output::hint("Add the zome to your DNA manifest to include it in the next build.");

    Ok(written)
}

fn resolve_output_dir(output_dir: Option<&Path>, config: &CliConfig) -> PathBuf {
    match (output_dir, &config.default_output_dir) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(configured)) => expand_path(configured),
        (None, None) => PathBuf::from("."),
    }
}
