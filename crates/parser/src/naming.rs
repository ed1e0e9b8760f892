//! Name synthesis for nested types and method bodies

/// Uppercase the first character, leaving the rest untouched
/// e.g., "createFolder" -> "CreateFolder"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Type name of a property nested in `parent`
/// e.g., ("Folder", "owner") -> "FolderOwner"
pub fn nested_type_name(parent: &str, property: &str) -> String {
    format!("{}{}", parent, capitalize(property))
}

/// Schema name used for both the request and the response body of an
/// operation: `<Tag><Name>Request`
pub fn body_schema_name(tag: &str, method_name: &str) -> String {
    format!("{}{}Request", tag, capitalize(method_name))
}
