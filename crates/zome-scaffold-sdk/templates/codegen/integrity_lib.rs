use holochain_deterministic_integrity::prelude::*;
{%- if !module_declarations.is_empty() %}

{{ module_declarations }}
{%- endif %}
{%- if !entry_imports.is_empty() %}

{{ entry_imports }}
{%- endif %}

#[hdk_entry_defs]
#[unit_enum(UnitEntryTypes)]
pub enum EntryTypes {
{%- if !entry_variants.is_empty() %}
{{ entry_variants }}
{%- endif %}
}

#[hdk_extern]
pub fn validate(_op: Op) -> ExternResult<ValidateCallbackResult> {
    Ok(ValidateCallbackResult::Valid)
}
