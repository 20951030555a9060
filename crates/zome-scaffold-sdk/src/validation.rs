//! Identifier checks for zome definitions.
//!
//! The generators trust their input and embed names as-is. This module is the
//! explicit gate in front of them: it reports every name that would produce
//! an invalid or colliding identifier, instead of stopping at the first.

use std::collections::HashMap;

use crate::codegen::RESERVED_MODULE_NAMES;
use crate::definitions::ZomeDefinition;
use crate::naming::{snake_case, title_case};

/// Strict and reserved keywords of the 2021 edition.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("entry type #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("entry type \"{name}\" does not produce a valid identifier (got \"{derived}\")")]
    InvalidIdentifier { name: String, derived: String },

    #[error("entry type \"{name}\" produces the reserved word \"{derived}\"")]
    ReservedWord { name: String, derived: String },

    #[error("entry type \"{name}\" produces the module \"{derived}\", which the zome already uses for src/{derived}.rs")]
    ReservedModule { name: String, derived: String },

    #[error("zome name \"{name}\" does not produce a valid crate identifier (got \"{derived}\")")]
    InvalidZomeName { name: String, derived: String },

    #[error("entry types #{first} and #{second} both resolve to \"{name}\"")]
    Duplicate {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("field \"{field}\" of entry type \"{entry}\" does not produce a valid identifier (got \"{derived}\")")]
    InvalidFieldName {
        entry: String,
        field: String,
        derived: String,
    },

    #[error("field \"{field}\" of entry type \"{entry}\" has an empty type")]
    EmptyFieldType { entry: String, field: String },
}

/// True when `ident` is a plain ASCII Rust identifier that is not a keyword.
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') || ident == "_" {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn is_reserved_word(ident: &str) -> bool {
    RUST_KEYWORDS.contains(&ident)
}

/// Check the zome name and every entry and field name. Returns all problems
/// found: the zome name first, then entries in order.
pub fn validate_definition(definition: &ZomeDefinition) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let zome_ident = snake_case(definition.zome_name());
    if !is_valid_identifier(&zome_ident) || is_reserved_word(&zome_ident) {
        errors.push(ValidationError::InvalidZomeName {
            name: definition.zome_name().to_string(),
            derived: zome_ident,
        });
    }
    let mut seen_titles: HashMap<String, usize> = HashMap::new();
    let mut seen_modules: HashMap<String, usize> = HashMap::new();

    for (index, entry) in definition.entry_defs.iter().enumerate() {
        let type_def = &entry.type_definition;
        let name = type_def.name.trim();

        if name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
            continue;
        }

        let snake = snake_case(name);
        let title = title_case(name);

        if !is_valid_identifier(&snake) {
            errors.push(ValidationError::InvalidIdentifier {
                name: name.to_string(),
                derived: snake.clone(),
            });
        } else if !is_valid_identifier(&title) {
            errors.push(ValidationError::InvalidIdentifier {
                name: name.to_string(),
                derived: title.clone(),
            });
        } else if is_reserved_word(&snake) {
            errors.push(ValidationError::ReservedWord {
                name: name.to_string(),
                derived: snake.clone(),
            });
        } else if RESERVED_MODULE_NAMES.contains(&snake.as_str()) {
            errors.push(ValidationError::ReservedModule {
                name: name.to_string(),
                derived: snake.clone(),
            });
        }

        if let Some(&first) = seen_titles.get(&title) {
            errors.push(ValidationError::Duplicate {
                name: title.clone(),
                first,
                second: index,
            });
        } else if let Some(&first) = seen_modules.get(&snake) {
            errors.push(ValidationError::Duplicate {
                name: snake.clone(),
                first,
                second: index,
            });
        }
        seen_titles.entry(title).or_insert(index);
        seen_modules.entry(snake).or_insert(index);

        for field in &type_def.fields {
            let field_ident = snake_case(&field.name);
            if !is_valid_identifier(&field_ident) || is_reserved_word(&field_ident) {
                errors.push(ValidationError::InvalidFieldName {
                    entry: name.to_string(),
                    field: field.name.clone(),
                    derived: field_ident,
                });
            }
            if field.field_type.trim().is_empty() {
                errors.push(ValidationError::EmptyFieldType {
                    entry: name.to_string(),
                    field: field.name.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::warn!(
            problems = errors.len(),
            zome = definition.zome_name(),
            "Zome definition failed validation"
        );
        Err(errors)
    }
}
