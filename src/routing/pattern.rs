//! Route pattern parsing.
//!
//! A pattern is a `/`-separated list of segments. A segment starting with `:`
//! binds whatever single path segment appears at that position.
//!
//! ```text
//! "/"           → []
//! "/admin"      → [Static("admin")]
//! "/staff/:id"  → [Static("staff"), Param("id")]
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced while parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern does not begin with `/`.
    #[error("pattern `{0}` must start with '/'")]
    MissingLeadingSlash(String),

    /// Pattern contains `//` or a trailing `/`.
    #[error("pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    /// Parameter name is empty or uses characters outside `[A-Za-z0-9_]`.
    #[error("pattern `{pattern}` has invalid parameter name `{name}`")]
    InvalidParamName { pattern: String, name: String },

    /// The same parameter name appears twice.
    #[error("pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, matched exactly (case-sensitive).
    Static(String),
    /// Named parameter, matches any non-empty segment.
    Param(String),
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `/staff/:id`.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(pattern.to_string()))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for raw in rest.split('/') {
                if raw.is_empty() {
                    return Err(PatternError::EmptySegment(pattern.to_string()));
                }

                match raw.strip_prefix(':') {
                    Some(name) => {
                        if !is_valid_param_name(name) {
                            return Err(PatternError::InvalidParamName {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        if segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(n) if n == name))
                        {
                            return Err(PatternError::DuplicateParam {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Static(raw.to_string())),
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern text as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if no segment is a parameter.
    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Returns true if some concrete path would match both patterns.
    pub fn conflicts_with(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a == b,
                    _ => true,
                })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
