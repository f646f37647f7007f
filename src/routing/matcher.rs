//! Path matching logic.
//!
//! # Responsibilities
//! - Match literal-only patterns by exact string comparison
//! - Match parameterized patterns segment by segment, binding parameters
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - Trailing slashes are significant (`/admin/` is not `/admin`)
//! - A parameter binds exactly one non-empty segment
//! - No regex: a match is a single pass over the path

use crate::routing::params::Params;
use crate::routing::pattern::{RoutePattern, Segment};

/// Trait for matching a path against a compiled pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the bound parameters if the path matches.
    fn match_path(&self, path: &str) -> Option<Params>;
}

/// Matches one literal path exactly.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactMatcher {
    fn match_path(&self, path: &str) -> Option<Params> {
        (path == self.path).then(Params::new)
    }
}

/// Matches a path segment by segment, binding `:name` segments.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    segments: Vec<Segment>,
}

impl SegmentMatcher {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl Matcher for SegmentMatcher {
    fn match_path(&self, path: &str) -> Option<Params> {
        let rest = path.strip_prefix('/')?;
        let mut parts = rest.split('/');
        let mut params = Params::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(expected) => {
                    if part != expected {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), part);
                }
            }
        }

        // Leftover segments mean the path is longer than the pattern
        if parts.next().is_some() {
            return None;
        }

        Some(params)
    }
}

/// Pick the cheapest matcher able to handle the pattern.
pub fn compile(pattern: &RoutePattern) -> Box<dyn Matcher> {
    if pattern.is_static() {
        Box::new(ExactMatcher::new(pattern.as_str()))
    } else {
        Box::new(SegmentMatcher::new(pattern.segments().to_vec()))
    }
}
