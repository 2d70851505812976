//! Cursor pagination over connection envelopes.

use std::future::Future;

use thiserror::Error;

use crate::error::ClientError;
use crate::response::Connection;

/// Cap on the number of nodes a pagination loop may collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit {
    /// Maximum number of nodes to fetch.
    pub max_items: usize,
}

impl PageLimit {
    /// Create a new limit.
    #[must_use]
    pub const fn new(max_items: usize) -> Self {
        Self { max_items }
    }
}

/// Pagination error type.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// Underlying client error.
    #[error("pagination fetch failed: {0}")]
    Client(#[from] ClientError),

    /// Pagination limit exceeded.
    #[error("pagination limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Walk a cursor-paginated resource, collecting every node.
///
/// `fetch_page` receives the `after` cursor for the page to load; the loop
/// feeds `pageInfo.endCursor` back in while `hasNextPage` is set.
///
/// When `limit` is set, exceeding the cap fails with
/// [`PaginationError::LimitExceeded`]; the result is never silently
/// truncated.
pub async fn paginate_nodes<T, F, Fut>(
    mut after: Option<String>,
    limit: Option<PageLimit>,
    mut fetch_page: F,
) -> Result<Vec<T>, PaginationError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Connection<T>, ClientError>>,
{
    let mut out = Vec::new();
    loop {
        let page = fetch_page(after.clone()).await?;
        let has_next = page.page_info.has_next_page;
        let end_cursor = page.page_info.end_cursor.clone();
        let nodes = page.into_nodes();

        let remaining = limit.map(|limit| limit.max_items.saturating_sub(out.len()));
        if let Some(remaining) = remaining {
            if remaining == 0 || nodes.len() > remaining {
                return Err(PaginationError::LimitExceeded(
                    "page limit reached".to_string(),
                ));
            }
        }
        out.extend(nodes);

        if !has_next {
            break;
        }
        after = end_cursor;
        if after.is_none() {
            break;
        }
    }

    Ok(out)
}
