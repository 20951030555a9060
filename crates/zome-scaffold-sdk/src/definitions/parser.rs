//! Zome definition loading with path-aware error reporting.

use std::path::{Path, PathBuf};

use super::ZomeDefinition;

/// Serialization format of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Yaml,
    Json,
}

impl DefinitionFormat {
    /// Pick a format from the file extension. Unknown extensions read as YAML,
    /// which also accepts plain JSON documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Error during definition loading.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read definition file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse definition YAML '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to parse definition JSON '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to parse definition: {0}")]
    Content(String),
}

/// Parse a zome definition file, choosing YAML or JSON by extension.
pub fn parse_definition(path: &Path) -> Result<ZomeDefinition, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let definition = match DefinitionFormat::from_path(path) {
        DefinitionFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| ParseError::Yaml {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        DefinitionFormat::Json => {
            serde_json::from_str(&content).map_err(|e| ParseError::Json {
                path: path.to_path_buf(),
                source: e,
            })?
        }
    };

    tracing::debug!(?path, "Loaded zome definition");
    Ok(definition)
}

/// Parse a zome definition from an in-memory string.
pub fn parse_definition_str(
    content: &str,
    format: DefinitionFormat,
) -> Result<ZomeDefinition, ParseError> {
    match format {
        DefinitionFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ParseError::Content(e.to_string()))
        }
        DefinitionFormat::Json => {
            serde_json::from_str(content).map_err(|e| ParseError::Content(e.to_string()))
        }
    }
}
