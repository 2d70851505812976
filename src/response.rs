//! Response envelope and variable-binding types.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// GraphQL response container: `{data, errors}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RawResponse<T> {
    /// Response data.
    #[serde(default)]
    pub data: Option<T>,
    /// GraphQL errors.
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl<T> RawResponse<T> {
    /// Returns `true` if no GraphQL errors were returned.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Cursor envelope carried by every connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there is a page after this one.
    #[serde(default)]
    pub has_next_page: bool,
    /// Whether there is a page before this one.
    #[serde(default)]
    pub has_previous_page: bool,
    /// Cursor of the last edge in this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
    /// Cursor of the first edge in this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

/// One `{cursor, node}` pair in a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Edge<T> {
    /// Cursor for this edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// The node itself.
    pub node: T,
}

/// Paginated connection result: `pageInfo` plus `edges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    /// Pagination info.
    pub page_info: PageInfo,
    /// Edges in this page.
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    /// Consume the connection, yielding nodes in edge order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// Values bound to the standard variables of a page query.
///
/// `filter` and `sort` are opaque server-side input scalars and stay
/// untyped JSON. Absent fields are omitted from the wire payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVariables {
    /// Resource filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    /// Sort specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,
    /// Forward page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    /// Backward page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i32>,
    /// Cursor to continue after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Cursor to stop before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Include soft-deleted records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_deleted: Option<bool>,
}

impl PageVariables {
    /// Create an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression.
    #[must_use]
    pub fn with_filter(mut self, filter: serde_json::Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the sort specification.
    #[must_use]
    pub fn with_sort(mut self, sort: serde_json::Value) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the forward page size.
    #[must_use]
    pub const fn with_first(mut self, first: i32) -> Self {
        self.first = Some(first);
        self
    }

    /// Set the backward page size.
    #[must_use]
    pub const fn with_last(mut self, last: i32) -> Self {
        self.last = Some(last);
        self
    }

    /// Continue after the given cursor.
    #[must_use]
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Stop before the given cursor.
    #[must_use]
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Request soft-deleted records as well.
    #[must_use]
    pub const fn with_show_deleted(mut self, show_deleted: bool) -> Self {
        self.show_deleted = Some(show_deleted);
        self
    }
}
