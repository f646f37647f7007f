//! Startup sequence.
//!
//! Load config → validate → (install logging) → compile the route table.
//! Loading emits no log events so it can run before the subscriber exists;
//! everything after compilation treats the table as read-only.

use std::path::Path;
use thiserror::Error;

use crate::config::{load_config, validate_config, ConfigError, RouterConfig};
use crate::error::RouterError;
use crate::routing::Router;

/// Failure while bringing the router up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] RouterError),
}

/// Load and validate the configuration file, or fall back to the built-in table.
pub fn load(config_path: Option<&Path>) -> Result<RouterConfig, StartupError> {
    match config_path {
        Some(path) => Ok(load_config(path)?),
        None => {
            let config = RouterConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// Compile the validated route table.
pub fn build_router(config: &RouterConfig) -> Result<Router, StartupError> {
    let router = Router::from_config(&config.routes)?;

    for route in router.routes() {
        tracing::debug!(
            name = route.name(),
            pattern = %route.pattern(),
            view = %route.view(),
            "Route registered"
        );
    }
    tracing::info!(routes = router.len(), "Router ready");

    Ok(router)
}
