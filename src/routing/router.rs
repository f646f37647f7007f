//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Resolve a path to its view and bound parameters
//! - Return a matched route or an explicit no-match
//! - Build paths for named routes
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan in declaration order; first match wins
//! - Explicit NotFound rather than a silent default route

use serde::Serialize;

use crate::config::RouteConfig;
use crate::error::RouterError;
use crate::history::HashLocation;
use crate::routing::matcher::{compile, Matcher};
use crate::routing::params::Params;
use crate::routing::pattern::{RoutePattern, Segment};
use crate::routing::view::View;

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// A route matched.
    Matched { view: View, params: Params },
    /// No route matched; the view host decides what to show.
    NotFound { path: String },
}

impl Resolution {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    pub fn view(&self) -> Option<View> {
        match self {
            Resolution::Matched { view, .. } => Some(*view),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn params(&self) -> Option<&Params> {
        match self {
            Resolution::Matched { params, .. } => Some(params),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Matched { view, .. } => view.as_str(),
            Resolution::NotFound { .. } => "not_found",
        }
    }

    /// Convert into a `Result`, turning NotFound into `RouterError::UnresolvedPath`.
    pub fn into_result(self) -> Result<(View, Params), RouterError> {
        match self {
            Resolution::Matched { view, params } => Ok((view, params)),
            Resolution::NotFound { path } => Err(RouterError::UnresolvedPath(path)),
        }
    }
}

/// A compiled route.
#[derive(Debug)]
pub struct Route {
    name: String,
    pattern: RoutePattern,
    view: View,
    matcher: Box<dyn Matcher>,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }
}

/// The route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Compile routes from configuration.
    ///
    /// The table is expected to have passed `config::validation`; this only
    /// fails when a pattern cannot be parsed.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouterError> {
        let routes = routes
            .iter()
            .map(|cfg| -> Result<Route, RouterError> {
                let pattern = RoutePattern::parse(&cfg.path)?;
                let matcher = compile(&pattern);
                Ok(Route {
                    name: cfg.name.clone(),
                    pattern,
                    view: cfg.view,
                    matcher,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(routes = routes.len(), "Route table compiled");
        Ok(Self { routes })
    }

    /// Resolve a path (the fragment part of the URL, without query) to a view.
    pub fn resolve(&self, path: &str) -> Resolution {
        for route in &self.routes {
            if let Some(params) = route.matcher.match_path(path) {
                tracing::trace!(path, route = %route.name, view = %route.view, "Route matched");
                return Resolution::Matched {
                    view: route.view,
                    params,
                };
            }
        }

        tracing::trace!(path, "No route matched");
        Resolution::NotFound {
            path: path.to_string(),
        }
    }

    /// Resolve the path part of a hash location; query and inner hash are ignored.
    pub fn resolve_location(&self, location: &HashLocation) -> Resolution {
        self.resolve(location.path())
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Build the concrete path for a named route.
    pub fn build_path(&self, name: &str, params: &Params) -> Result<String, RouterError> {
        let route = self
            .route(name)
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;

        let mut path = String::new();
        for segment in route.pattern.segments() {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| RouterError::MissingParam {
                        route: name.to_string(),
                        param: param.clone(),
                    })?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return Err(RouterError::InvalidParam {
                            param: param.clone(),
                            value: value.to_string(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}
