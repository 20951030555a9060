//! Askama template structs and fragment builders for integrity zome sources.

use askama::Template;

use super::{CodegenError, ScaffoldOptions, RESERVED_MODULE_NAMES};
use crate::definitions::{TypeDefinition, ZomeDefinition};
use crate::file_tree::FileNode;
use crate::naming::{merge_strings, snake_case, title_case};
use crate::versions;

/// The validation callback emitted verbatim into every `lib.rs`.
pub const VALIDATE_CALLBACK: &str = "#[hdk_extern]
pub fn validate(_op: Op) -> ExternResult<ValidateCallbackResult> {
    Ok(ValidateCallbackResult::Valid)
}";

// =========================================================================
// Fragments
// =========================================================================

/// `mod <snake>;` for each entry, in order.
pub fn module_declarations(definition: &ZomeDefinition) -> String {
    merge_strings(
        definition
            .entry_type_names()
            .map(|name| format!("mod {};", snake_case(name))),
    )
}

/// `use <snake>::<Title>;` for each entry, in order.
pub fn entry_imports(definition: &ZomeDefinition) -> String {
    merge_strings(
        definition
            .entry_type_names()
            .map(|name| format!("use {}::{};", snake_case(name), title_case(name))),
    )
}

/// Attribute plus `<Title>(<Title>),` for each entry, indented for the enum body.
pub fn entry_variants(definition: &ZomeDefinition, required_validations: u8) -> String {
    merge_strings(definition.entry_type_names().map(|name| {
        let title = title_case(name);
        format!(
            "    #[entry_def(required_validations = {required_validations})]\n    {title}({title}),"
        )
    }))
}

// =========================================================================
// Templates
// =========================================================================

#[derive(Template, Debug)]
#[template(path = "codegen/integrity_lib.rs", escape = "none")]
struct IntegrityLibTemplate {
    module_declarations: String,
    entry_imports: String,
    entry_variants: String,
}

#[derive(Debug)]
struct EntryField {
    name: String,
    field_type: String,
}

#[derive(Template, Debug)]
#[template(path = "codegen/entry_type.rs", escape = "none")]
struct EntryTypeTemplate {
    type_name: String,
    fields: Vec<EntryField>,
}

#[derive(Template, Debug)]
#[template(path = "codegen/zome_cargo.toml", escape = "none")]
struct ZomeCargoTemplate<'a> {
    package_name: &'a str,
    hdi_version: &'a str,
    serde_version: &'a str,
}

fn finish(rendered: Result<String, askama::Error>) -> Result<String, CodegenError> {
    let mut content = rendered.map_err(|e| CodegenError::Rendering(e.to_string()))?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

// =========================================================================
// Renderers
// =========================================================================

/// Render the integrity zome `lib.rs` with the stock options.
pub fn render_integrity_lib(definition: &ZomeDefinition) -> Result<FileNode, CodegenError> {
    render_integrity_lib_with(definition, &ScaffoldOptions::default())
}

/// Render the integrity zome `lib.rs`.
///
/// Entries keep their input order. Duplicate names are emitted twice and
/// malformed names pass through unchanged.
pub fn render_integrity_lib_with(
    definition: &ZomeDefinition,
    options: &ScaffoldOptions,
) -> Result<FileNode, CodegenError> {
    tracing::debug!(
        entries = definition.entry_defs.len(),
        required_validations = options.required_validations,
        "Rendering integrity zome lib.rs"
    );

    let template = IntegrityLibTemplate {
        module_declarations: module_declarations(definition),
        entry_imports: entry_imports(definition),
        entry_variants: entry_variants(definition, options.required_validations),
    };

    Ok(FileNode::file(finish(template.render())?))
}

/// Render the module holding one entry type's struct.
pub fn render_entry_module(type_definition: &TypeDefinition) -> Result<FileNode, CodegenError> {
    let template = EntryTypeTemplate {
        type_name: title_case(&type_definition.name),
        fields: type_definition
            .fields
            .iter()
            .map(|f| EntryField {
                name: snake_case(&f.name),
                field_type: f.field_type.clone(),
            })
            .collect(),
    };

    Ok(FileNode::file(finish(template.render())?))
}

/// Render the zome crate's `Cargo.toml`.
pub fn render_zome_manifest(
    package_name: &str,
    options: &ScaffoldOptions,
) -> Result<FileNode, CodegenError> {
    let template = ZomeCargoTemplate {
        package_name,
        hdi_version: &options.hdi_version,
        serde_version: versions::SERDE_VERSION,
    };

    Ok(FileNode::file(finish(template.render())?))
}

/// Assemble a complete integrity zome crate.
///
/// The returned directory holds a single child named after the snake-cased
/// zome name, containing `Cargo.toml`, `src/lib.rs` and `src/<entry>.rs` for
/// every entry. Entries sharing a module name share a file; the last one wins.
/// An entry whose module would replace `src/lib.rs` is rejected.
pub fn scaffold_integrity_zome(
    definition: &ZomeDefinition,
    options: &ScaffoldOptions,
) -> Result<FileNode, CodegenError> {
    let package_name = snake_case(definition.zome_name());
    if package_name.is_empty() {
        return Err(CodegenError::InvalidZomeName(
            definition.zome_name().to_string(),
        ));
    }

    let mut zome = FileNode::dir();
    zome.insert("Cargo.toml", render_zome_manifest(&package_name, options)?)?;
    zome.insert("src/lib.rs", render_integrity_lib_with(definition, options)?)?;
    for entry in &definition.entry_defs {
        let module = snake_case(&entry.type_definition.name);
        if RESERVED_MODULE_NAMES.contains(&module.as_str()) {
            return Err(CodegenError::ModuleCollision {
                entry: entry.type_definition.name.clone(),
                module,
            });
        }
        zome.insert(
            format!("src/{module}.rs"),
            render_entry_module(&entry.type_definition)?,
        )?;
    }

    let mut root = FileNode::dir();
    root.insert(&package_name, zome)?;

    tracing::info!(
        zome = %package_name,
        files = root.flatten().len(),
        "Scaffolded integrity zome"
    );

    Ok(root)
}
