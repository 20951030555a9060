//! `zome-scaffold-ctl validate`: report every identifier problem in a definition.

use zome_scaffold_sdk::naming::{snake_case, title_case};
use zome_scaffold_sdk::validation::validate_definition;

use super::DefinitionArgs;
use crate::error::{CtlError, CtlResult};
use crate::output;

pub(crate) fn handle_validate_command(source: &DefinitionArgs) -> CtlResult<()> {
    let definition = source.load()?;

    if let Err(errors) = validate_definition(&definition) {
        for error in &errors {
            output::error(error);
        }
        return Err(CtlError::Validation(errors));
    }

    output::success(format!(
        "Zome \"{}\" is valid ({} entry type(s))",
        definition.zome_name(),
        definition.entry_defs.len()
    ));
    for name in definition.entry_type_names() {
        output::item(format!("{} -> mod {}", title_case(name), snake_case(name)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let args = DefinitionArgs {
            entry: vec!["post".to_string(), "my thing".to_string()],
            ..Default::default()
        };
        assert!(handle_validate_command(&args).is_ok());
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let args = DefinitionArgs {
            entry: vec![
                "post".to_string(),
                "Post".to_string(),
                "struct".to_string(),
            ],
            ..Default::default()
        };
        match handle_validate_command(&args) {
            Err(CtlError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
