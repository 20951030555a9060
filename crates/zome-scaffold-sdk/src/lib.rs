//! Zome scaffold SDK: entry definitions, naming, code generation, and file trees.
//!
//! This crate provides the generation capabilities consumed by `zome-scaffold-ctl`.
//! Everything here is synchronous and free of global state; only
//! [`file_tree::write_file_tree`] touches the file system.
//!
//! # Modules
//!
//! - [`definitions`] — Zome and entry type definitions, YAML/JSON loading
//! - [`naming`] — Snake/title case conversion and fragment merging
//! - [`codegen`] — Askama-rendered integrity zome sources (`lib.rs`, entry modules, `Cargo.toml`)
//! - [`validation`] — Explicit identifier checks for definitions before rendering
//! - [`file_tree`] — In-memory file/directory nodes and writing them to disk
//! - [`versions`] — Crate versions written into generated manifests

pub mod codegen;
pub mod definitions;
pub mod file_tree;
pub mod naming;
pub mod validation;
pub mod versions;

pub use codegen::{
    render_integrity_lib, render_integrity_lib_with, scaffold_integrity_zome, CodegenError,
    ScaffoldOptions,
};
pub use definitions::{EntryDefinition, FieldDefinition, TypeDefinition, ZomeDefinition};
pub use file_tree::FileNode;
