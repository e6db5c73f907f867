//! Fetching the remaining pages of a list result.
//!
//! After the first page reports `total-pages`, the rest can be requested
//! concurrently with a bounded number of requests in flight.

use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};
use log::debug;

use super::pagination::PagedResponse;
use crate::error::Result;

/// Default number of pages fetched at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Fetch `remaining_pages` with at most `max_concurrent` requests in flight.
///
/// Items are returned in page order. The first failing page aborts the
/// whole fetch and its error is returned.
///
/// # Example
///
/// ```ignore
/// let first = client.list_workspaces("acme", None).await?;
/// let rest = fetch_remaining_pages(
///     first.remaining_pages(),
///     |page| async move {
///         let options = WorkspaceListOptions::default().page(page, 100);
///         Ok(client.list_workspaces("acme", Some(&options)).await?.items)
///     },
///     4,
/// )
/// .await?;
/// ```
pub async fn fetch_remaining_pages<T, F, Fut>(
    remaining_pages: Vec<usize>,
    fetch_page: F,
    max_concurrent: usize,
) -> Result<Vec<T>>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if remaining_pages.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        "Fetching {} remaining pages with max {} concurrent",
        remaining_pages.len(),
        max_concurrent
    );

    let pages: Vec<Vec<T>> = stream::iter(remaining_pages)
        .map(&fetch_page)
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await?;

    Ok(pages.into_iter().flatten().collect())
}

/// Combine an already-fetched first page with all remaining pages.
pub async fn collect_all_pages<T, F, Fut>(
    first: PagedResponse<T>,
    fetch_page: F,
    max_concurrent: usize,
) -> Result<Vec<T>>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let remaining = first.remaining_pages();
    let mut items = first.items;
    items.extend(fetch_remaining_pages(remaining, fetch_page, max_concurrent).await?);
    Ok(items)
}
