//! Hash-fragment locations.
//!
//! In hash mode the application path lives after the `#` of the page URL:
//!
//! ```text
//! http://host/app/#/staff/1?tab=shifts#today
//!                  └──────┘ └───────┘ └───┘
//!                    path     query    hash
//! ```
//!
//! The server only ever sees `/app/`; everything after `#` stays in the browser.

use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors produced while parsing a location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("invalid URL `{input}`: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// The application location carried in a URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashLocation {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl HashLocation {
    /// Parse a full URL, a `#`-prefixed fragment or a bare application path.
    ///
    /// - `http://host/#/staff/1` → fragment of the URL
    /// - `/app/#/staff/1` or `#/staff/1` → text after the first `#`
    /// - `/staff/1` → taken as the application path itself
    ///
    /// Only text before the first `#` decides whether the input is a URL, so
    /// `#/?redirect=http://x/` stays a fragment.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let document = input.split_once('#').map_or(input, |(doc, _)| doc);
        let is_local = input.starts_with(['#', '/']);
        if !is_local && document.contains("://") {
            let url = Url::parse(input).map_err(|source| LocationError::InvalidUrl {
                input: input.to_string(),
                source,
            })?;
            return Ok(Self::from_fragment(url.fragment().unwrap_or("")));
        }

        match input.split_once('#') {
            Some((_, fragment)) => Ok(Self::from_fragment(fragment)),
            None => Ok(Self::from_fragment(input)),
        }
    }

    /// Build a location from fragment text (without the leading `#`).
    pub fn from_fragment(fragment: &str) -> Self {
        let (rest, hash) = match fragment.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (fragment, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self { path, query, hash }
    }

    /// Application path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string, without `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Inner hash, without `#`.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Decoded query pairs (`a=1&b=x+y` → `[("a","1"),("b","x y")]`).
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `path?query#hash`, as it appears after the outer `#`.
    pub fn full_path(&self) -> String {
        let mut out = self.path.clone();
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(hash) = &self.hash {
            out.push('#');
            out.push_str(hash);
        }
        out
    }
}

impl fmt::Display for HashLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

impl Default for HashLocation {
    fn default() -> Self {
        Self::from_fragment("/")
    }
}

/// Converts fragment text (`/staff/1?tab=a#today`, optionally with one
/// leading `#`). A second `#` is the inner hash, so document paths such as
/// `/app/#/staff/1` must go through [`HashLocation::parse`] instead.
impl From<&str> for HashLocation {
    fn from(fragment: &str) -> Self {
        Self::from_fragment(fragment.strip_prefix('#').unwrap_or(fragment))
    }
}
