//! Page-route middleware.
//!
//! Requests for the frontend pages (`/`, `/dashboard/...`, `/login`,
//! `/register`) pass through here. Session checks live in the client SDK, so
//! a match is only logged and the request always continues untouched.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use regex::RegexSet;

/// Paths the page middleware is attached to.
pub const PAGE_MATCHERS: &[&str] = &["/", "/dashboard/:path*", "/login", "/register"];

/// Compiled set of route patterns.
///
/// Pattern syntax: `:name` matches one non-empty segment, `:name*` zero or
/// more trailing segments, `:name+` one or more. Everything else is literal.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    set: RegexSet,
}

impl PathMatcher {
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let set = RegexSet::new(patterns.iter().map(|p| pattern_to_regex(p)))?;
        Ok(Self { set })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.set.is_match(path)
    }
}

fn pattern_to_regex(pattern: &str) -> String {
    let mut out = String::from("^");
    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix(':') {
            Some(param) if param.ends_with('*') => out.push_str("(?:/[^/]+)*"),
            Some(param) if param.ends_with('+') => out.push_str("(?:/[^/]+)+"),
            Some(_) => out.push_str("/[^/]+"),
            None => {
                out.push('/');
                out.push_str(&regex::escape(segment));
            }
        }
    }
    if out == "^" {
        out.push('/');
    }
    out.push_str("/?$");
    out
}

/// Forward every request unchanged; matched page routes are logged.
pub async fn passthrough(
    State(matcher): State<Arc<PathMatcher>>,
    request: Request,
    next: Next,
) -> Response {
    if matcher.matches(request.uri().path()) {
        tracing::debug!(path = %request.uri().path(), "Page route allowed");
    }
    next.run(request).await
}
