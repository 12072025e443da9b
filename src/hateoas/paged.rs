//! Paged collection envelope

use serde::{Deserialize, Serialize};

use super::links::{paged_url, RequestContext};
use super::Link;

/// Envelope for one page of a collection, with pagination metadata and
/// self/prev/next navigation links.
///
/// `page` and `page_size` are the effective values produced by
/// [`super::pagination::normalize`], not the raw request values;
/// [`PagedResult::add_collection_links`] is undefined for a zero page size.
/// Single-page listings that bypass normalization should pass
/// `page_size = max(count, 1)` so exactly one page exists and no prev/next
/// links are produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub links: Vec<Link>,
}

impl<T> PagedResult<T> {
    /// Wrap one page of items; the four fields are stored verbatim
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total_items: i64) -> Self {
        Self {
            items,
            page,
            page_size,
            total_items,
            links: Vec::new(),
        }
    }

    /// Number of pages the full collection spans under the current page size
    pub fn total_pages(&self) -> i64 {
        (self.total_items + self.page_size - 1) / self.page_size
    }

    /// Attach the `self` link and, where the pages exist, `prev` and `next`
    pub fn add_collection_links(&mut self, ctx: &RequestContext, path: &str) {
        self.links.push(Link::new(
            paged_url(ctx, path, self.page, self.page_size),
            "self",
            "GET",
        ));
        if self.page > 1 {
            self.links.push(Link::new(
                paged_url(ctx, path, self.page - 1, self.page_size),
                "prev",
                "GET",
            ));
        }
        if self.page < self.total_pages() {
            self.links.push(Link::new(
                paged_url(ctx, path, self.page + 1, self.page_size),
                "next",
                "GET",
            ));
        }
    }
}
