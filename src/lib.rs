//! Hash-mode route table for the single-page application.
//!
//! Maps fragment paths (`#/`, `#/admin`, `#/staff/:id`) to views.

pub mod config;
pub mod error;
pub mod history;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use error::RouterError;
pub use history::{HashHistory, HashLocation};
pub use navigation::{Navigator, ViewHost};
pub use routing::{Params, Resolution, Router, View};
