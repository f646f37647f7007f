//! Router error definitions.

use thiserror::Error;

use crate::routing::pattern::PatternError;

/// Errors raised by the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No route pattern matches the requested path.
    #[error("no route matches path `{0}`")]
    UnresolvedPath(String),

    /// A named route lookup failed.
    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    /// Building a path for a route that needs a parameter that was not given.
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },

    /// A parameter value cannot be placed in a single path segment.
    #[error("parameter `{param}` has value {value:?} which is not a single path segment")]
    InvalidParam { param: String, value: String },

    /// A route pattern failed to parse.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
