use holochain_deterministic_integrity::prelude::*;

#[hdk_entry_helper]
#[derive(Clone, PartialEq)]
pub struct {{ type_name }} {
{%- for field in fields %}
    pub {{ field.name }}: {{ field.field_type }},
{%- endfor %}
}
