//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject route tables where two patterns could match the same path
//! - Check each route binds the parameters its view needs
//! - Validate addresses, levels and the history base
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before the route table is compiled

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{PatternError, RoutePattern, View};

/// Accepted `log_level` values.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes configured")]
    NoRoutes,

    #[error("route name must not be empty")]
    EmptyRouteName,

    #[error("route name `{0}` is used more than once")]
    DuplicateRouteName(String),

    #[error("route `{route}`: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("routes `{first}` ({first_path}) and `{second}` ({second_path}) can match the same path")]
    ConflictingRoutes {
        first: String,
        first_path: String,
        second: String,
        second_path: String,
    },

    #[error("route `{route}` renders {view} which requires parameter `{param}`")]
    MissingViewParam {
        route: String,
        view: View,
        param: String,
    },

    #[error("history base `{0}` must start with '/'")]
    InvalidHistoryBase(String),

    #[error("invalid {field} `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_routes(config, &mut errors);

    if !config.history.base.starts_with('/') {
        errors.push(ValidationError::InvalidHistoryBase(config.history.base.clone()));
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routes(config: &RouterConfig, errors: &mut Vec<ValidationError>) {
    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
        return;
    }

    let mut names = HashSet::new();
    let mut parsed: Vec<(&str, RoutePattern)> = Vec::new();

    for route in &config.routes {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteName);
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }

        let pattern = match RoutePattern::parse(&route.path) {
            Ok(p) => p,
            Err(source) => {
                errors.push(ValidationError::InvalidPattern {
                    route: route.name.clone(),
                    source,
                });
                continue;
            }
        };

        for param in route.view.required_params() {
            if !pattern.param_names().any(|name| name == *param) {
                errors.push(ValidationError::MissingViewParam {
                    route: route.name.clone(),
                    view: route.view,
                    param: (*param).to_string(),
                });
            }
        }

        for (other_name, other) in &parsed {
            if pattern.conflicts_with(other) {
                errors.push(ValidationError::ConflictingRoutes {
                    first: (*other_name).to_string(),
                    first_path: other.as_str().to_string(),
                    second: route.name.clone(),
                    second_path: pattern.as_str().to_string(),
                });
            }
        }

        parsed.push((route.name.as_str(), pattern));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_conflicting_routes() {
        let mut config = RouterConfig::default();
        config
            .routes
            .push(RouteConfig::new("new_staff", "/staff/new", View::AdminPanel));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::ConflictingRoutes { first, second, .. }
                if first == "staff" && second == "new_staff"
        ));
    }

    #[test]
    fn test_staff_panel_without_id() {
        let config = RouterConfig {
            routes: vec![RouteConfig::new("staff", "/staff", View::StaffPanel)],
            ..RouterConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::MissingViewParam { param, .. } if param == "id"
        ));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig {
            routes: vec![
                RouteConfig::new("a", "/a", View::Login),
                RouteConfig::new("a", "b", View::Login),
                RouteConfig::new("", "/c", View::AdminPanel),
            ],
            ..RouterConfig::default()
        };
        config.history.base = "app".into();
        config.server.bind_address = "nowhere".into();
        config.server.request_timeout_secs = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateRouteName("a".into())));
        assert!(errors.contains(&ValidationError::EmptyRouteName));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidPattern { route, .. } if route == "a")));
        assert!(errors.contains(&ValidationError::InvalidHistoryBase("app".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("loud".into())));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidAddress { field, .. } if *field == "server.bind_address")));
    }

    #[test]
    fn test_no_routes() {
        let config = RouterConfig {
            routes: Vec::new(),
            ..RouterConfig::default()
        };
        assert_eq!(validate_config(&config), Err(vec![ValidationError::NoRoutes]));
    }
}
