//! Integrity zome code generation.
//!
//! Produces Rust sources for a Holochain integrity zome from a
//! [`ZomeDefinition`]:
//!
//! - [`render_integrity_lib`] — the zome's `lib.rs` as a single [`FileNode::File`]
//! - [`scaffold_integrity_zome`] — a full crate directory (`Cargo.toml`,
//!   `src/lib.rs`, one module per entry type)
//!
//! Rendering is pure and never validates names; run
//! [`crate::validation::validate_definition`] first when the input is untrusted.
//! The scaffold only refuses layouts it cannot write: an entry module that
//! would replace `src/lib.rs`, or a zome name with no crate name.

mod integrity;

pub use integrity::{
    entry_imports, entry_variants, module_declarations, render_entry_module,
    render_integrity_lib, render_integrity_lib_with, render_zome_manifest,
    scaffold_integrity_zome, VALIDATE_CALLBACK,
};

use crate::versions;

/// Module names the scaffold generates itself; entry modules may not use them.
pub const RESERVED_MODULE_NAMES: &[&str] = &["lib"];

/// Default `required_validations` written on every entry def attribute.
pub const DEFAULT_REQUIRED_VALIDATIONS: u8 = 5;

/// Errors from code generation.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("template rendering failed: {0}")]
    Rendering(String),

    #[error("entry type \"{entry}\" would overwrite the generated src/{module}.rs")]
    ModuleCollision { entry: String, module: String },

    #[error("zome name \"{0}\" does not produce a usable crate name")]
    InvalidZomeName(String),

    #[error("failed to assemble scaffold: {0}")]
    FileTree(#[from] crate::file_tree::FileTreeError),
}

/// Knobs for generated output. [`Default`] reproduces the stock skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Value of `required_validations` on each `#[entry_def]` attribute.
    pub required_validations: u8,
    /// Version requirement for `holochain_deterministic_integrity` in `Cargo.toml`.
    pub hdi_version: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            required_validations: DEFAULT_REQUIRED_VALIDATIONS,
            hdi_version: versions::HDI_VERSION.to_string(),
        }
    }
}
