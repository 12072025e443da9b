//! HATEOAS response envelopes
//!
//! The reusable core of the API surface: every response is wrapped in an
//! envelope that carries hypermedia links, so clients can navigate related
//! and paginated resources without hardcoding URL structure.
//!
//! - `pagination`: coerce raw page/pageSize input into bounded effective values
//! - `links`: absolute, version-aware URI construction
//! - `resource`: single-payload envelope
//! - `paged`: collection envelope with pagination metadata and navigation links
//!
//! Everything here is pure and synchronous. Builders take the per-request
//! [`RequestContext`] as an explicit parameter, never ambient state, so they
//! can be exercised without a live request pipeline.

pub mod links;
pub mod paged;
pub mod pagination;
pub mod resource;

pub use links::{ApiVersion, RequestContext};
pub use paged::PagedResult;
pub use resource::Resource;

use serde::{Deserialize, Serialize};

/// Hypermedia link attached to a response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl Link {
    /// Create a new link; links are immutable once constructed
    pub fn new(
        href: impl Into<String>,
        rel: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method: method.into(),
        }
    }
}
