//! Paginated query document assembly.

use serde_json::Value;

use crate::error::ClientError;
use crate::fields::{NameMap, default_name_map};
use crate::selection::{format_field_values, format_fields_with};

/// Assemble a paginated query document for `name` with the default name map.
///
/// The document declares the six standard pagination variables, forwards
/// them to `name` as arguments by matching name, and wraps the formatted
/// field selection in the `pageInfo` / `edges.node` connection envelope.
/// When `show_deleted` is set, a seventh `$showDeleted: Boolean` variable is
/// declared and forwarded; otherwise the token does not appear at all.
///
/// `name` is trusted caller input and is not validated.
pub fn page_query(name: &str, fields: &[&str], show_deleted: bool) -> String {
    page_query_with(name, fields, show_deleted, default_name_map())
}

/// [`page_query`] with an explicit name map.
pub fn page_query_with(
    name: &str,
    fields: &[&str],
    show_deleted: bool,
    name_map: &NameMap,
) -> String {
    render(name, &format_fields_with(fields, name_map), show_deleted)
}

/// Assemble a paginated query from descriptors held as untyped JSON.
///
/// Fails before emitting any query text when a descriptor is not a string.
pub fn page_query_values(
    name: &str,
    fields: &[Value],
    show_deleted: bool,
    name_map: &NameMap,
) -> Result<String, ClientError> {
    Ok(render(
        name,
        &format_field_values(fields, name_map)?,
        show_deleted,
    ))
}

// Commas (including trailing ones) are insignificant tokens in the GraphQL
// grammar, so the declaration block stays valid with or without the
// conditional showDeleted line.
fn render(name: &str, body: &str, show_deleted: bool) -> String {
    let declare = if show_deleted {
        "$showDeleted: Boolean,"
    } else {
        ""
    };
    let forward = if show_deleted {
        "showDeleted: $showDeleted,"
    } else {
        ""
    };
    format!(
        "
query(
    $filter: FilterInput,
    $sort: SortInput,
    $first: Int,
    $last: Int,
    $after: String,
    $before: String,
    {declare}
) {{
    {name}(
        filter: $filter,
        sort: $sort,
        first: $first,
        last: $last,
        after: $after,
        before: $before,
        {forward}
    ) {{
        pageInfo {{
            hasNextPage
            hasPreviousPage
            endCursor
            startCursor
        }}
        edges {{
            node {{
                {body}
            }}
        }}
    }}
}}"
    )
}
