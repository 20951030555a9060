//! Command handlers for `zome-scaffold-ctl`.
//!
//! Each handler loads a [`ZomeDefinition`] through [`DefinitionArgs`] and
//! delegates the generation work to `zome_scaffold_sdk`.

mod init;
mod render;
mod scaffold;
mod validate;

pub(crate) use init::handle_init_command;
pub(crate) use render::handle_render_command;
pub(crate) use scaffold::handle_scaffold_command;
pub(crate) use validate::handle_validate_command;

use std::path::PathBuf;

use clap::Args;
use zome_scaffold_sdk::definitions::{
    parse_definition, EntryDefinition, FieldDefinition, TypeDefinition, ZomeDefinition,
};
use zome_scaffold_sdk::validation::validate_definition;

use crate::cli_config::CliConfig;
use crate::error::{CtlError, CtlResult};
use crate::output;

/// Where the zome definition comes from.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct DefinitionArgs {
    /// YAML or JSON zome definition file
    #[arg(short, long, conflicts_with = "entry")]
    pub definition: Option<PathBuf>,

    /// Entry type, repeatable. Fields may follow an '=': post=title:String,body:String
    #[arg(short, long)]
    pub entry: Vec<String>,
}

impl DefinitionArgs {
    pub fn load(&self) -> CtlResult<ZomeDefinition> {
        let definition = match &self.definition {
            Some(path) => parse_definition(path)?,
            None if self.entry.is_empty() => return Err(CtlError::MissingDefinition),
            None => ZomeDefinition {
                name: None,
                entry_defs: self
                    .entry
                    .iter()
                    .map(String::as_str)
                    .map(parse_entry_arg)
                    .collect::<CtlResult<Vec<_>>>()?,
            },
        };

        tracing::debug!(
            zome = definition.zome_name(),
            entries = definition.entry_defs.len(),
            "Resolved zome definition"
        );
        Ok(definition)
    }
}

/// Parse `post` or `post=title:String,body:String`.
pub(crate) fn parse_entry_arg(value: &str) -> CtlResult<EntryDefinition> {
    let (name, fields) = match value.split_once('=') {
        Some((name, fields)) => (name, Some(fields)),
        None => (value, None),
    };

    let fields = fields
        .map(|spec| {
            spec.split(',')
                .filter(|f| !f.trim().is_empty())
                .map(|f| {
                    f.parse::<FieldDefinition>()
                        .map_err(|source| CtlError::InvalidEntry {
                            value: value.to_string(),
                            source,
                        })
                })
                .collect::<CtlResult<Vec<_>>>()
        })
        .transpose()?
        .unwrap_or_default();

    Ok(EntryDefinition::new(
        TypeDefinition::new(name.trim()).with_fields(fields),
    ))
}

/// Run validation when the config asks for it, listing every problem found.
pub(crate) fn ensure_valid(definition: &ZomeDefinition, config: &CliConfig) -> CtlResult<()> {
    if !config.strict_validation {
        return Ok(());
    }
    validate_definition(definition).map_err(|errors| {
        report_problems(&errors);
        CtlError::Validation(errors)
    })
}

fn report_problems(errors: &[zome_scaffold_sdk::validation::ValidationError]) {
    output::warning(format!("Found {} problem(s):", errors.len()));
    for error in errors {
        output::item(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_arg_name_only() {
        let entry = parse_entry_arg("my thing").unwrap();
        assert_eq!(entry.type_definition.name, "my thing");
        assert!(entry.type_definition.fields.is_empty());
    }

    #[test]
    fn test_parse_entry_arg_with_fields() {
        let entry = parse_entry_arg("post=title:String, tags:Vec<String>").unwrap();
        assert_eq!(entry.type_definition.name, "post");
        assert_eq!(
            entry.type_definition.fields,
            vec![
                FieldDefinition::new("title", "String"),
                FieldDefinition::new("tags", "Vec<String>"),
            ]
        );
    }

    #[test]
    fn test_parse_entry_arg_bad_field() {
        let result = parse_entry_arg("post=title");
        assert!(matches!(result, Err(CtlError::InvalidEntry { .. })));
    }

    #[test]
    fn test_load_requires_a_source() {
        let args = DefinitionArgs::default();
        assert!(matches!(args.load(), Err(CtlError::MissingDefinition)));
    }

    #[test]
    fn test_load_from_entries() {
        let args = DefinitionArgs {
            definition: None,
            entry: vec!["post".to_string(), "comment".to_string()],
        };
        let definition = args.load().unwrap();
        assert_eq!(definition.zome_name(), "integrity");
        let names: Vec<_> = definition.entry_type_names().collect();
        assert_eq!(names, vec!["post", "comment"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zome.yaml");
        std::fs::write(
            &path,
            "name: from_file\nentry_defs:\n  - typeDefinition: { name: post }\n",
        )
        .unwrap();

        let args = DefinitionArgs {
            definition: Some(path),
            ..Default::default()
        };
        let definition = args.load().unwrap();
        assert_eq!(definition.zome_name(), "from_file");
        assert_eq!(definition.entry_defs.len(), 1);
    }

    #[test]
    fn test_ensure_valid_respects_config() {
        let definition = ZomeDefinition::from_entry_names(None, ["type"]);

        let strict = CliConfig::default();
        assert!(matches!(
            ensure_valid(&definition, &strict),
            Err(CtlError::Validation(errors)) if errors.len() == 1
        ));

        let lenient = CliConfig {
            strict_validation: false,
            ..Default::default()
        };
        assert!(ensure_valid(&definition, &lenient).is_ok());
    }
}
