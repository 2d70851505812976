//! Selection-set building from compact field descriptors.
//!
//! A descriptor is a single string naming one field, optionally encoding a
//! nested path with [`FIELD_DELIMITER`]: `"attributes%price%amount"` selects
//! `attributes{price{amount}}`. Each path segment is translated through a
//! [`NameMap`] before emission; unmapped segments pass through unchanged.

use serde_json::Value;

use crate::error::ClientError;
use crate::fields::{NameMap, default_name_map};

/// Separator between path segments inside a field descriptor.
///
/// There is no escape sequence: a field name containing this character
/// cannot be expressed as a descriptor.
pub const FIELD_DELIMITER: char = '%';

/// Resolve one path segment to its canonical schema field name.
///
/// Total and infallible: segments missing from the map resolve to
/// themselves, so raw schema field names are always valid descriptors.
pub fn resolve_field_name<'a>(segment: &'a str, name_map: &'a NameMap) -> &'a str {
    name_map.get(segment).map_or(segment, String::as_str)
}

/// Expand a single descriptor into a braced selection fragment.
///
/// A descriptor with `k` delimiter-separated segments expands to `k - 1`
/// nested brace pairs; a bare descriptor expands to the resolved name with
/// no braces.
pub fn expand_field(descriptor: &str, name_map: &NameMap) -> String {
    let segments: Vec<&str> = descriptor.split(FIELD_DELIMITER).collect();
    let mut out = segments
        .iter()
        .map(|&segment| resolve_field_name(segment, name_map))
        .collect::<Vec<_>>()
        .join("{");
    out.push_str(&"}".repeat(segments.len() - 1));
    out
}

/// Expand an ordered descriptor list into one selection-set body.
///
/// Expansions appear in input order, space separated. An empty list yields
/// the empty string.
pub fn format_fields_with(fields: &[&str], name_map: &NameMap) -> String {
    fields
        .iter()
        .map(|&field| expand_field(field, name_map))
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`format_fields_with`] using the process-wide default name map.
pub fn format_fields(fields: &[&str]) -> String {
    format_fields_with(fields, default_name_map())
}

/// Expand a descriptor list that arrives as untyped JSON.
///
/// Every element must be a JSON string. The whole list is validated before
/// any descriptor is expanded, so a bad element never produces partial
/// output.
pub fn format_field_values(fields: &[Value], name_map: &NameMap) -> Result<String, ClientError> {
    for field in fields {
        if !field.is_string() {
            return Err(ClientError::InvalidFieldType {
                actual: json_type_name(field),
            });
        }
    }
    let expanded: Vec<String> = fields
        .iter()
        .filter_map(Value::as_str)
        .map(|field| expand_field(field, name_map))
        .collect();
    Ok(expanded.join(" "))
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
