//! Single-resource envelope

use serde::{Deserialize, Serialize};

use super::links::{absolute_url, RequestContext};
use super::Link;

/// Envelope wrapping a single payload with its relation links.
///
/// The envelope never inspects the payload, it only carries it. Links are
/// appended in call order and never deduplicated; callers control ordering
/// by call sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<T> {
    pub data: T,
    pub links: Vec<Link>,
}

impl<T> Resource<T> {
    /// Wrap a payload with an empty link list
    pub fn new(data: T) -> Self {
        Self {
            data,
            links: Vec::new(),
        }
    }

    /// Append the canonical `self` link for this resource
    pub fn add_self(&mut self, ctx: &RequestContext, path: &str) {
        self.add_link("self", ctx, path, "GET");
    }

    /// Append an arbitrary relation link
    pub fn add_link(&mut self, rel: &str, ctx: &RequestContext, path: &str, method: &str) {
        self.links.push(Link::new(absolute_url(ctx, path), rel, method));
    }
}
