use std::path::PathBuf;

use zome_scaffold_sdk::codegen::CodegenError;
use zome_scaffold_sdk::definitions::{FieldParseError, ParseError};
use zome_scaffold_sdk::file_tree::FileTreeError;
use zome_scaffold_sdk::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CtlError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    FileTree(#[from] FileTreeError),

    #[error("invalid --entry value \"{value}\": {source}")]
    InvalidEntry {
        value: String,
        source: FieldParseError,
    },

    #[error("no entry types given, pass --definition <FILE> or at least one --entry <NAME>")]
    MissingDefinition,

    #[error("zome definition failed validation with {} problem(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

pub(crate) type CtlResult<T> = Result<T, CtlError>;
