//! Default short-token to schema-field-name table.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Mapping from short field token to canonical schema field name.
///
/// Lookup is by exact key; tokens absent from the map pass through the
/// resolver unchanged.
pub type NameMap = HashMap<String, String>;

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("created", "creationDate"),
    ("updated", "lastChangeDate"),
    ("remote", "remoteId"),
    ("state", "remoteState"),
    ("feed", "dataFeedId"),
    ("channel", "mediaChannel"),
    ("org", "organization"),
    ("analytics", "resultAnalytics"),
];

static DEFAULT_NAME_MAP: LazyLock<NameMap> = LazyLock::new(|| {
    DEFAULT_ENTRIES
        .iter()
        .map(|&(token, name)| (token.to_owned(), name.to_owned()))
        .collect()
});

/// Process-wide default name map, read-only after initialisation.
pub fn default_name_map() -> &'static NameMap {
    &DEFAULT_NAME_MAP
}
