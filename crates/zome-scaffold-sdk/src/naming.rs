//! Case conversion for generated identifiers.
//!
//! Type names arrive in whatever form the user typed them (`"my thing"`,
//! `"MyThing"`, `"my-thing"`). Module and file names use [`snake_case`], type
//! and variant names use [`title_case`].

use heck::{ToPascalCase, ToSnakeCase};

/// Separator placed between generated fragments.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Lowercase, underscore-separated form used for module and file names.
pub fn snake_case(name: &str) -> String {
    name.to_snake_case()
}

/// Capitalized words joined without separators, used for type names.
pub fn title_case(name: &str) -> String {
    name.to_pascal_case()
}

/// Join generated fragments with a blank line between each one.
///
/// Order is preserved and nothing is deduplicated. An empty input yields an
/// empty string.
pub fn merge_strings<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged = String::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if i > 0 {
            merged.push_str(FRAGMENT_SEPARATOR);
        }
        merged.push_str(fragment.as_ref());
    }
    merged
}
