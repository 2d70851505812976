//! Client-side helpers for the campaign-management GraphQL API.
//!
//! This crate provides:
//! - A selection-set builder expanding compact `%`-delimited field
//!   descriptors into nested GraphQL selections.
//! - A paginated query assembler emitting the standard connection envelope.
//! - A thin HTTP executor with a typed `{data, errors}` error surface.
//! - Cursor pagination helpers and validated schema scalars.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

mod client;
mod error;
mod fields;
mod pagination;
mod query;
mod resource;
mod response;
mod scalar;
mod selection;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use error::{ApiError, ApiErrorExtensions, ClientError, ErrorCode, HttpErrorInfo, RawPayload};
pub use fields::{NameMap, default_name_map};
pub use pagination::{PageLimit, PaginationError, paginate_nodes};
pub use query::{page_query, page_query_values, page_query_with};
pub use resource::{EntitlementResource, ResultResource};
pub use response::{Connection, Edge, PageInfo, PageVariables, RawResponse};
pub use scalar::{DateIso, JsonObject, ObjectId, ScalarError};
pub use selection::{
    FIELD_DELIMITER, expand_field, format_field_values, format_fields, format_fields_with,
    resolve_field_name,
};
