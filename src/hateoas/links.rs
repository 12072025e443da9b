//! Version-aware link building
//!
//! Every link the API hands out is an absolute URI carrying the version
//! segment that serviced the request. The builders are pure functions of a
//! [`RequestContext`] and a logical path, so identical inputs always produce
//! byte-identical strings.

/// API version resolved for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    pub major: u32,
    pub minor: u32,
}

impl ApiVersion {
    /// The version currently mounted by the router
    pub const V1: ApiVersion = ApiVersion { major: 1, minor: 0 };

    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// URL segment for this version: `v1` for a zero minor, `v1.1` otherwise
    pub fn segment(&self) -> String {
        if self.minor > 0 {
            format!("v{}.{}", self.major, self.minor)
        } else {
            format!("v{}", self.major)
        }
    }
}

/// Request origin and resolved version, read-only to the link builders.
///
/// Constructed once per request by the transport layer and passed explicitly
/// into every builder call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub scheme: String,
    pub host: String,
    pub version: Option<ApiVersion>,
}

impl RequestContext {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        version: Option<ApiVersion>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            version,
        }
    }

    /// Version segment in effect; requests with no resolved version are v1
    fn version_segment(&self) -> String {
        match self.version {
            Some(version) => version.segment(),
            None => "v1".to_string(),
        }
    }
}

/// Versioned absolute path for a logical resource path, e.g. `patios/5`
/// becomes `/api/v1/patios/5`.
///
/// Strips any leading `/` and a redundant `api/` prefix, so a path reused
/// from another builder call is never double-prefixed.
pub fn versioned_path(ctx: &RequestContext, path: &str) -> String {
    let mut path = path.trim_start_matches('/');
    if let Some(prefix) = path.get(..4) {
        if prefix.eq_ignore_ascii_case("api/") {
            path = &path[4..];
        }
    }
    format!("/api/{}/{}", ctx.version_segment(), path)
}

/// Absolute URI for a logical resource path
pub fn absolute_url(ctx: &RequestContext, path: &str) -> String {
    format!("{}://{}{}", ctx.scheme, ctx.host, versioned_path(ctx, path))
}

/// Absolute URI with pagination query parameters appended.
///
/// `page` and `page_size` must be the effective values produced by
/// [`super::pagination::normalize`].
pub fn paged_url(ctx: &RequestContext, path: &str, page: i64, page_size: i64) -> String {
    format!(
        "{}?page={}&pageSize={}",
        absolute_url(ctx, path),
        page,
        page_size
    )
}
