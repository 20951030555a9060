//! Zome and entry type definitions.
//!
//! A [`ZomeDefinition`] is the input to every generator in [`crate::codegen`].
//! Definitions are usually loaded from a YAML or JSON file with
//! [`parse_definition`], or built from bare type names with
//! [`ZomeDefinition::from_entry_names`].
//!
//! ```yaml
//! name: forum_integrity
//! entry_defs:
//!   - typeDefinition:
//!       name: post
//!       fields:
//!         - { name: title, type: String }
//!   - typeDefinition:
//!       name: comment
//! ```

mod parser;

pub use parser::{parse_definition, parse_definition_str, DefinitionFormat, ParseError};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Zome name used when a definition does not carry one.
pub const DEFAULT_ZOME_NAME: &str = "integrity";

/// The unit of generated source: an ordered list of entry definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZomeDefinition {
    /// Zome crate name. Only used by multi-file scaffolds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Entry definitions in declaration order.
    #[serde(default)]
    pub entry_defs: Vec<EntryDefinition>,
}

impl ZomeDefinition {
    /// Build a definition from bare type names, keeping their order.
    pub fn from_entry_names<I, S>(name: Option<String>, entry_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            entry_defs: entry_names
                .into_iter()
                .map(|n| EntryDefinition::new(TypeDefinition::new(n)))
                .collect(),
        }
    }

    /// The zome name, falling back to [`DEFAULT_ZOME_NAME`].
    pub fn zome_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_ZOME_NAME)
    }

    /// Type names of all entries, in declaration order.
    pub fn entry_type_names(&self) -> impl Iterator<Item = &str> {
        self.entry_defs
            .iter()
            .map(|e| e.type_definition.name.as_str())
    }
}

/// One persisted record kind exposed by the zome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDefinition {
    #[serde(rename = "typeDefinition", alias = "type_definition")]
    pub type_definition: TypeDefinition,
}

impl EntryDefinition {
    pub fn new(type_definition: TypeDefinition) -> Self {
        Self { type_definition }
    }
}

/// A data type identified by a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,

    /// Struct fields for the generated entry module. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }
}

/// A named, typed struct field: `title: String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.field_type)
    }
}

/// Error parsing the `<field_name>:<rust_type>` shorthand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    #[error("field '{0}' is missing a type, expected <field_name>:<rust_type>")]
    MissingType(String),
    #[error("field '{0}' is missing a name, expected <field_name>:<rust_type>")]
    MissingName(String),
}

impl FromStr for FieldDefinition {
    type Err = FieldParseError;

    /// Parses `title:String`. Everything after the first `:` is the type, so
    /// paths such as `body:std::string::String` keep their `::`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, field_type) = s
            .split_once(':')
            .ok_or_else(|| FieldParseError::MissingType(s.to_string()))?;

        let name = name.trim();
        let field_type = field_type.trim();

        if name.is_empty() {
            return Err(FieldParseError::MissingName(s.to_string()));
        }
        if field_type.is_empty() {
            return Err(FieldParseError::MissingType(s.to_string()));
        }

        Ok(Self::new(name, field_type))
    }
}
